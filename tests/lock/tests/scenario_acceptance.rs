//! End-to-end acceptance for the two reference scenarios and the edge
//! starts around them.

use sweep_harness::runner::run_scenario;
use sweep_harness::scenarios::{part_a, part_b, HeuristicChoice, Scenario};
use sweep_kernel::carrier::position::Position;
use sweep_kernel::carrier::world_state::{WorldError, WorldState};
use sweep_kernel::operators::action::Action;
use sweep_kernel::operators::apply::{apply, is_goal};
use sweep_search::error::SearchError;
use sweep_search::graph::TerminationReason;
use sweep_search::heuristic::{FarthestDirt, NearestDirt};
use sweep_search::policy::SearchPolicy;
use sweep_search::search::run_search;

fn reference_dirt() -> Vec<Position> {
    part_a().dirty
}

/// Replay `actions` from the scenario's start and return the final state.
fn replay(scenario: &Scenario, actions: &[Action]) -> WorldState {
    let mut state = scenario.initial_state().unwrap();
    for &action in actions {
        state = apply(&state, action).unwrap();
    }
    state
}

#[test]
fn part_a_cleans_every_cell() {
    let outcome = run_search(5, reference_dirt(), Position::new(1, 1), &NearestDirt).unwrap();
    let actions = outcome.actions.as_ref().unwrap();

    assert!(!actions.is_empty());
    assert_eq!(actions.iter().filter(|a| **a == Action::Suck).count(), 5);
    assert!(outcome.expanded_count > 0);
    assert_eq!(outcome.f_values.len(), actions.len() + 1);
    assert!(is_goal(&replay(&part_a(), actions)));
    assert_eq!(outcome.termination_reason.as_str(), "goal_reached");
}

#[test]
fn part_a_finds_the_optimal_plan() {
    let run = run_scenario(&part_a(), &SearchPolicy::default()).unwrap();
    assert_eq!(run.report.cost, Some(11));
    assert_eq!(run.report.f_values.first(), Some(&6));
    assert_eq!(run.report.f_values.last(), Some(&11));
}

#[test]
fn part_b_cleans_every_cell() {
    let outcome = run_search(5, reference_dirt(), Position::new(1, 1), &FarthestDirt).unwrap();
    let actions = outcome.actions.as_ref().unwrap();

    assert_eq!(actions.iter().filter(|a| **a == Action::Suck).count(), 5);
    assert!(outcome.expanded_count > 0);
    assert!(is_goal(&replay(&part_b(), actions)));
}

#[test]
fn part_b_cost_is_at_least_the_optimum() {
    let optimum = run_scenario(
        &part_a().with_heuristic(HeuristicChoice::Zero),
        &SearchPolicy::default(),
    )
    .unwrap()
    .report
    .cost
    .unwrap();
    let b = run_scenario(&part_b(), &SearchPolicy::default()).unwrap();
    let cost = b.report.cost.unwrap();

    assert_eq!(optimum, 11);
    assert!(cost >= optimum);
    // h2 never overestimates here, so the plan is also optimal.
    assert_eq!(cost, optimum);
    assert_eq!(b.report.f_values.first(), Some(&9));
}

#[test]
fn clean_start_terminates_before_expanding() {
    let clean = std::iter::empty::<Position>();
    let outcome = run_search(5, clean, Position::new(2, 2), &FarthestDirt).unwrap();
    assert_eq!(outcome.actions, Some(Vec::new()));
    assert_eq!(outcome.f_values, vec![0]);
    assert_eq!(outcome.expanded_count, 0);
    assert_eq!(
        outcome.termination_reason,
        TerminationReason::GoalReached { node_id: 0 }
    );
}

#[test]
fn agent_outside_grid_is_rejected_up_front() {
    let err = run_search(5, reference_dirt(), Position::new(5, 1), &NearestDirt).unwrap_err();
    assert!(matches!(
        err,
        SearchError::InvalidWorld(WorldError::OutOfBounds { .. })
    ));
}

#[test]
fn dirt_outside_grid_is_rejected_up_front() {
    let err = run_search(3, [Position::new(0, 3)], Position::new(0, 0), &NearestDirt).unwrap_err();
    assert!(matches!(
        err,
        SearchError::InvalidWorld(WorldError::OutOfBounds { .. })
    ));
}

#[test]
fn zero_grid_is_rejected_up_front() {
    let clean = std::iter::empty::<Position>();
    let err = run_search(0, clean, Position::new(0, 0), &NearestDirt).unwrap_err();
    assert!(matches!(err, SearchError::InvalidWorld(WorldError::Grid(_))));
}
