//! The world model: legal actions, the transition function, and the goal test.
//!
//! `apply()` is the single transition entry point. It never mutates its input;
//! every call returns a fresh [`WorldState`].
//!
//! Legality rules:
//! - `MoveLeft` is illegal iff `agent.x == 0`
//! - `MoveRight` is illegal iff `agent.x == size - 1`
//! - `MoveDown` is illegal iff `agent.y == 0`
//! - `MoveUp` is illegal iff `agent.y == size - 1`
//! - `Suck` is illegal iff the agent's cell is clean

use crate::carrier::position::Position;
use crate::carrier::world_state::WorldState;
use crate::operators::action::Action;

/// Typed failure for action application. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyFailure {
    /// A move would take the agent off the grid.
    OutOfBounds {
        action: Action,
        from: Position,
        grid_size: u32,
    },
}

impl std::fmt::Display for ApplyFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds {
                action,
                from,
                grid_size,
            } => write!(
                f,
                "{action} from {from} leaves the {grid_size}x{grid_size} grid"
            ),
        }
    }
}

impl std::error::Error for ApplyFailure {}

/// Result type for apply.
pub type ApplyResult = Result<WorldState, ApplyFailure>;

/// Whether `action` is legal in `state`.
#[must_use]
pub fn is_legal(state: &WorldState, action: Action) -> bool {
    let agent = state.agent();
    let max = state.grid().max_coord();
    match action {
        Action::MoveLeft => agent.x != 0,
        Action::MoveRight => agent.x != max,
        Action::MoveDown => agent.y != 0,
        Action::MoveUp => agent.y != max,
        Action::Suck => state.is_dirty_at(agent),
    }
}

/// The legal actions at `state`, in [`Action::ALL`] order.
///
/// Never contains a move that leaves the grid, and never contains `Suck`
/// on a clean cell.
#[must_use]
pub fn legal_actions(state: &WorldState) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|&a| is_legal(state, a))
        .collect()
}

/// Apply `action` to `state`, producing the successor state.
///
/// Moves translate the agent by one cell. `Suck` removes the agent's cell
/// from the dirty set, and is a no-op on a clean cell. All other fields are
/// carried over unchanged.
///
/// # Errors
///
/// Returns [`ApplyFailure::OutOfBounds`] if a move would leave the grid.
/// Callers that only apply actions from [`legal_actions`] never see this.
pub fn apply(state: &WorldState, action: Action) -> ApplyResult {
    let agent = state.agent();
    if action == Action::Suck {
        return Ok(state.without_dirt(agent));
    }

    let (dx, dy) = action.delta();
    let out_of_bounds = ApplyFailure::OutOfBounds {
        action,
        from: agent,
        grid_size: state.grid().size(),
    };
    let x = agent
        .x
        .checked_add_signed(i32::from(dx))
        .ok_or_else(|| out_of_bounds.clone())?;
    let y = agent
        .y
        .checked_add_signed(i32::from(dy))
        .ok_or_else(|| out_of_bounds.clone())?;
    let target = Position::new(x, y);
    if !state.grid().contains(target) {
        return Err(out_of_bounds);
    }
    Ok(state.with_agent(target))
}

/// Goal test: true iff no dirty cells remain.
#[must_use]
pub fn is_goal(state: &WorldState) -> bool {
    state.is_clean()
}
