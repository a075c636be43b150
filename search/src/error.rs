//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, budget exhausted) are expressed via
//! [`crate::graph::TerminationReason`] and always produce a `SearchGraph`
//! audit trail.

use sweep_kernel::carrier::world_state::WorldError;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No `SearchGraph`
/// is produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A policy budget is unusable (e.g. zero expansions).
    InvalidPolicy { detail: String },
    /// The initial world could not be constructed.
    InvalidWorld(WorldError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::InvalidWorld(e) => write!(f, "invalid initial world: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWorld(e) => Some(e),
            Self::InvalidPolicy { .. } => None,
        }
    }
}

impl From<WorldError> for SearchError {
    fn from(e: WorldError) -> Self {
        Self::InvalidWorld(e)
    }
}
