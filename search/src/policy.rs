//! Search policy: budgets applied by the A* loop.

use crate::error::SearchError;

/// Search budget configuration.
///
/// Neither budget is reached by the reference scenarios; they bound runaway
/// searches on large grids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions (frontier pops that generate successors).
    pub max_expansions: u64,
    /// Depth cutoff: successors deeper than this are skipped.
    pub max_depth: u32,
}

impl SearchPolicy {
    /// Validate that the budgets allow at least one step.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if either budget is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_depth == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_depth must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Canonical JSON echo of the policy, recorded in graph metadata.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
        })
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: 100_000,
            max_depth: 10_000,
        }
    }
}
