//! Search world contract trait.

use sweep_kernel::carrier::world_state::WorldState;
use sweep_kernel::operators::action::Action;
use sweep_kernel::operators::apply::{self, ApplyResult};

/// Trait for worlds that support search.
///
/// # Contract
///
/// - `legal_actions` must be deterministic: same state → same actions in the
///   same order.
/// - `apply` must be pure: it never mutates its input, and the same
///   `(state, action)` always yields an equal result.
pub trait SearchWorld {
    /// Unique world identifier, recorded in graph metadata.
    fn world_id(&self) -> &str;

    /// Enumerate all legal actions from the given state.
    fn legal_actions(&self, state: &WorldState) -> Vec<Action>;

    /// Deterministic transition.
    ///
    /// # Errors
    ///
    /// Returns the kernel's [`apply::ApplyFailure`] if the action cannot be applied.
    fn apply(&self, state: &WorldState, action: Action) -> ApplyResult;

    /// Test whether the given state satisfies the world's goal.
    fn is_goal(&self, state: &WorldState) -> bool;
}

/// The vacuum world: the kernel's action set, transition and goal test.
#[derive(Debug, Clone, Copy, Default)]
pub struct VacuumWorld;

impl SearchWorld for VacuumWorld {
    fn world_id(&self) -> &str {
        "vacuum_grid:v1"
    }

    fn legal_actions(&self, state: &WorldState) -> Vec<Action> {
        apply::legal_actions(state)
    }

    fn apply(&self, state: &WorldState, action: Action) -> ApplyResult {
        apply::apply(state, action)
    }

    fn is_goal(&self, state: &WorldState) -> bool {
        apply::is_goal(state)
    }
}
