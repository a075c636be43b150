//! Shared helpers for sweep benchmark suites.

use sweep_harness::scenarios::{part_a, HeuristicChoice, Scenario};
use sweep_kernel::carrier::position::Position;
use sweep_kernel::carrier::world_state::WorldState;
use sweep_search::contract::VacuumWorld;
use sweep_search::policy::SearchPolicy;
use sweep_search::search::{search, SearchResult};

/// A named benchmark workload.
pub struct Regime {
    pub name: &'static str,
    pub scenario: Scenario,
}

fn regime(name: &'static str, grid_size: u32, agent: (u32, u32), dirt: &[(u32, u32)]) -> Regime {
    Regime {
        name,
        scenario: Scenario {
            name: name.to_string(),
            grid_size,
            agent: agent.into(),
            dirty: dirt.iter().copied().map(Position::from).collect(),
            heuristic: HeuristicChoice::H1,
        },
    }
}

/// Workloads ordered roughly by state-space size.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "reference_column",
            scenario: part_a(),
        },
        regime("corners_6", 6, (2, 3), &[(0, 0), (5, 0), (0, 5), (5, 5)]),
        regime(
            "scattered_8",
            8,
            (0, 0),
            &[(7, 7), (1, 6), (4, 2), (6, 1), (2, 3), (5, 5)],
        ),
        regime(
            "diagonal_7",
            7,
            (0, 6),
            &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6)],
        ),
    ]
}

/// The heuristics every regime is measured with.
pub const HEURISTICS: [HeuristicChoice; 3] =
    [HeuristicChoice::H1, HeuristicChoice::H2, HeuristicChoice::Zero];

/// Short label for a heuristic choice.
#[must_use]
pub fn heuristic_label(choice: HeuristicChoice) -> &'static str {
    match choice {
        HeuristicChoice::H1 => "h1",
        HeuristicChoice::H2 => "h2",
        HeuristicChoice::Zero => "zero",
    }
}

/// Validated root state for a regime.
///
/// # Panics
///
/// Panics if the regime's world is invalid. Benchmark setup failures are fatal.
#[must_use]
pub fn root_state(regime: &Regime) -> WorldState {
    regime.scenario.initial_state().expect("regime world is valid")
}

/// Run `search()` alone, without report building.
///
/// # Panics
///
/// Panics if the default policy is rejected.
#[must_use]
pub fn run_search_only(root: &WorldState, choice: HeuristicChoice) -> SearchResult {
    search(
        root.clone(),
        &VacuumWorld,
        choice.heuristic(),
        &SearchPolicy::default(),
    )
    .expect("default policy is valid")
}
