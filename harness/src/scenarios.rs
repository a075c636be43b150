//! Fixed problem instances.
//!
//! Both reference scenarios share the same world: a 5×5 grid whose whole
//! `x = 0` column is dirty, with the agent starting at `(1, 1)`. They differ
//! only in the heuristic.

use sweep_kernel::carrier::position::{GridSpec, Position};
use sweep_kernel::carrier::world_state::{WorldError, WorldState};
use sweep_search::heuristic::{FarthestDirt, Heuristic, NearestDirt, ZeroHeuristic};

/// Which heuristic a scenario runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicChoice {
    /// Nearest dirty cell + dirt count.
    H1,
    /// Farthest dirty cell + dirt count.
    H2,
    /// Uniform-cost baseline.
    Zero,
}

impl HeuristicChoice {
    #[must_use]
    pub fn heuristic(self) -> &'static dyn Heuristic {
        match self {
            Self::H1 => &NearestDirt,
            Self::H2 => &FarthestDirt,
            Self::Zero => &ZeroHeuristic,
        }
    }
}

/// A named search problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub grid_size: u32,
    pub agent: Position,
    pub dirty: Vec<Position>,
    pub heuristic: HeuristicChoice,
}

impl Scenario {
    /// Build the validated initial state.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the grid size is zero or any position is
    /// outside the grid.
    pub fn initial_state(&self) -> Result<WorldState, WorldError> {
        WorldState::with_grid_size(self.grid_size, self.agent, self.dirty.iter().copied())
    }

    /// Same problem, different heuristic.
    #[must_use]
    pub fn with_heuristic(&self, heuristic: HeuristicChoice) -> Self {
        Self {
            heuristic,
            ..self.clone()
        }
    }
}

/// The dirty column shared by both reference scenarios.
fn reference_dirt() -> Vec<Position> {
    (0..GridSpec::REFERENCE_SIZE)
        .map(|y| Position::new(0, y))
        .collect()
}

fn reference(name: &str, heuristic: HeuristicChoice) -> Scenario {
    Scenario {
        name: name.to_string(),
        grid_size: GridSpec::REFERENCE_SIZE,
        agent: Position::new(1, 1),
        dirty: reference_dirt(),
        heuristic,
    }
}

/// Reference scenario A: nearest-dirt heuristic.
#[must_use]
pub fn part_a() -> Scenario {
    reference("part_a", HeuristicChoice::H1)
}

/// Reference scenario B: farthest-dirt heuristic.
#[must_use]
pub fn part_b() -> Scenario {
    reference("part_b", HeuristicChoice::H2)
}

/// Both reference scenarios, in run order.
#[must_use]
pub fn reference_scenarios() -> Vec<Scenario> {
    vec![part_a(), part_b()]
}
