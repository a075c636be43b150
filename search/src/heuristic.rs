//! Heuristic estimates of remaining cost.
//!
//! A heuristic is a pure function of a [`WorldState`]. Values are integers
//! (every action costs 1), always `>= 0`, and exactly 0 on a clean state.

use sweep_kernel::carrier::world_state::WorldState;

/// Trait for state-to-cost estimators.
///
/// Implementations must be deterministic and side-effect free.
pub trait Heuristic {
    /// Stable name recorded in graph metadata and reports.
    fn name(&self) -> &str;

    /// Estimated remaining cost from `state` to a clean state.
    fn estimate(&self, state: &WorldState) -> i64;
}

/// Shared shape of h1/h2: an aggregate of Manhattan distances plus the dirt count.
fn distance_plus_count(
    state: &WorldState,
    pick: impl FnOnce(&mut dyn Iterator<Item = u64>) -> Option<u64>,
) -> i64 {
    // min/max over an empty dirt set is undefined; a clean state costs 0.
    if state.is_clean() {
        return 0;
    }
    let agent = state.agent();
    let mut distances = state.dirty().iter().map(|cell| agent.manhattan(*cell));
    let distance = pick(&mut distances).unwrap_or(0);
    let count = i64::try_from(state.dirty_count()).unwrap_or(i64::MAX);
    i64::try_from(distance)
        .unwrap_or(i64::MAX)
        .saturating_add(count)
}

/// h1: Manhattan distance to the nearest dirty cell plus the number of dirty cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestDirt;

impl Heuristic for NearestDirt {
    fn name(&self) -> &str {
        "h1_nearest_dirt"
    }

    fn estimate(&self, state: &WorldState) -> i64 {
        distance_plus_count(state, |distances| distances.min())
    }
}

/// h2: Manhattan distance to the farthest dirty cell plus the number of dirty cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct FarthestDirt;

impl Heuristic for FarthestDirt {
    fn name(&self) -> &str {
        "h2_farthest_dirt"
    }

    fn estimate(&self, state: &WorldState) -> i64 {
        distance_plus_count(state, |distances| distances.max())
    }
}

/// Always 0. Turns A* into uniform-cost search, whose costs are optimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn name(&self) -> &str {
        "zero"
    }

    fn estimate(&self, _state: &WorldState) -> i64 {
        0
    }
}

/// Adapter for plain `Fn(&WorldState) -> i64` closures.
pub struct FnHeuristic<F> {
    name: String,
    f: F,
}

impl<F> FnHeuristic<F>
where
    F: Fn(&WorldState) -> i64,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Heuristic for FnHeuristic<F>
where
    F: Fn(&WorldState) -> i64,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn estimate(&self, state: &WorldState) -> i64 {
        (self.f)(state)
    }
}

/// h1 as a free function.
#[must_use]
pub fn h1(state: &WorldState) -> i64 {
    NearestDirt.estimate(state)
}

/// h2 as a free function.
#[must_use]
pub fn h2(state: &WorldState) -> i64 {
    FarthestDirt.estimate(state)
}
