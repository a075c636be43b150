//! Exhaustive heuristic checks over the reference scenario's state space.
//!
//! Every reachable state (25 agent cells × 32 dirt subsets) gets its exact
//! cost-to-go from a backward sweep; both heuristics are then checked for
//! admissibility and consistency against it.

use lock_tests::state_space::StateSpace;
use sweep_harness::scenarios::part_a;
use sweep_search::contract::VacuumWorld;
use sweep_search::heuristic::{h1, h2, FarthestDirt, Heuristic, NearestDirt};
use sweep_search::policy::SearchPolicy;
use sweep_search::search::search;

fn reference_space() -> StateSpace {
    StateSpace::explore(&part_a().initial_state().unwrap())
}

#[test]
fn reference_space_is_fully_enumerated() {
    let space = reference_space();
    assert_eq!(space.len(), 25 * 32);
    assert_eq!(space.cost_to_go().len(), space.len());
}

#[test]
fn start_state_optimum_is_eleven() {
    let space = reference_space();
    let start = part_a().initial_state().unwrap();
    assert_eq!(space.cost_to_go()[&start], 11);
}

#[test]
fn h1_never_overestimates() {
    let space = reference_space();
    for (state, cost) in space.cost_to_go() {
        assert!(h1(&state) <= cost, "h1={} > {cost} at {state}", h1(&state));
    }
}

#[test]
fn h2_never_overestimates() {
    let space = reference_space();
    for (state, cost) in space.cost_to_go() {
        assert!(h2(&state) <= cost, "h2={} > {cost} at {state}", h2(&state));
    }
}

#[test]
fn h2_dominates_h1() {
    let space = reference_space();
    for state in space.states() {
        assert!(h2(state) >= h1(state), "h2 < h1 at {state}");
    }
}

#[test]
fn both_heuristics_are_consistent() {
    let space = reference_space();
    for (state, next) in &space.successors {
        for succ in next {
            assert!(h1(state) <= 1 + h1(succ), "h1 inconsistent on {state} -> {succ}");
            assert!(h2(state) <= 1 + h2(succ), "h2 inconsistent on {state} -> {succ}");
        }
    }
}

#[test]
fn search_cost_matches_exact_cost_from_every_state() {
    let space = reference_space();
    let exact = space.cost_to_go();
    let heuristics: [&dyn Heuristic; 2] = [&NearestDirt, &FarthestDirt];
    // Every 37th state keeps the sweep quick while touching all dirt counts.
    for (state, &cost) in exact.iter().step_by(37) {
        for heuristic in heuristics {
            let result = search(
                state.clone(),
                &VacuumWorld,
                heuristic,
                &SearchPolicy::default(),
            )
            .unwrap();
            let solution = result.solution().unwrap();
            assert_eq!(
                solution.cost(),
                cost,
                "{} returned a suboptimal plan from {state}",
                heuristic.name()
            );
        }
    }
}
