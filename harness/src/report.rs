//! `RunReport`: the canonical summary of one scenario run.
//!
//! The report is a derived view of the search result. Its `graph_digest`
//! binds it to the exact `SearchGraph` it was produced from.

use sweep_kernel::carrier::position::Position;
use sweep_kernel::operators::action::Action;
use sweep_kernel::proof::canon::{canonical_json_bytes, CanonError};
use sweep_kernel::proof::hash::{canonical_hash, ContentHash};
use sweep_kernel::proof::hash_domain::HashDomain;

/// Summary of a scenario run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub scenario: String,
    pub world_id: String,
    pub heuristic: String,
    pub grid_size: u32,
    pub agent: Position,
    pub dirty: Vec<Position>,
    pub termination_reason: String,
    /// `None` when no path was found.
    pub actions: Option<Vec<Action>>,
    /// f value of every node on the path, root first.
    pub f_values: Vec<i64>,
    /// Successor nodes admitted to the frontier.
    pub expanded_count: u64,
    /// Frontier pops that generated successors.
    pub total_expansions: u64,
    /// Final path cost; `None` when no path was found.
    pub cost: Option<i64>,
    pub graph_digest: ContentHash,
}

impl RunReport {
    /// Nodes on the solution path (root included), the count the demo prints.
    #[must_use]
    pub fn path_nodes(&self) -> usize {
        self.f_values.len()
    }

    #[must_use]
    pub fn suck_count(&self) -> usize {
        self.actions
            .iter()
            .flatten()
            .filter(|a| **a == Action::Suck)
            .count()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "actions": self
                .actions
                .as_ref()
                .map(|acts| acts.iter().map(|a| a.as_str()).collect::<Vec<_>>()),
            "agent": position_to_json(self.agent),
            "cost": self.cost,
            "dirty": self.dirty.iter().copied().map(position_to_json).collect::<Vec<_>>(),
            "expanded_count": self.expanded_count,
            "f_values": self.f_values,
            "graph_digest": self.graph_digest.as_str(),
            "grid_size": self.grid_size,
            "heuristic": self.heuristic,
            "scenario": self.scenario,
            "schema_version": "run_report.v1",
            "termination_reason": self.termination_reason,
            "total_expansions": self.total_expansions,
            "world_id": self.world_id,
        })
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(report_digest(&self.to_canonical_json_bytes()?))
    }
}

/// Digest of already-canonical report bytes.
#[must_use]
pub fn report_digest(canonical_bytes: &[u8]) -> ContentHash {
    canonical_hash(HashDomain::RunReport, canonical_bytes)
}

fn position_to_json(p: Position) -> serde_json::Value {
    serde_json::json!([p.x, p.y])
}
