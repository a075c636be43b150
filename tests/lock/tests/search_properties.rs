//! Structural properties of the world model and the engine, checked over
//! every reachable state of the reference scenario.

use std::collections::BTreeSet;

use lock_tests::state_space::StateSpace;
use sweep_harness::scenarios::{part_a, reference_scenarios};
use sweep_kernel::operators::action::Action;
use sweep_kernel::operators::apply::{apply, is_goal, legal_actions};
use sweep_search::contract::VacuumWorld;
use sweep_search::heuristic::{h1, h2};
use sweep_search::policy::SearchPolicy;
use sweep_search::search::search;

fn reference_space() -> StateSpace {
    StateSpace::explore(&part_a().initial_state().unwrap())
}

#[test]
fn goal_iff_no_dirt() {
    for state in reference_space().states() {
        assert_eq!(is_goal(state), state.dirty().is_empty(), "at {state}");
    }
}

#[test]
fn legal_actions_stay_on_grid_and_never_suck_clean_cells() {
    for state in reference_space().states() {
        let agent = state.agent();
        for action in legal_actions(state) {
            if action == Action::Suck {
                assert!(state.is_dirty_at(agent), "suck offered on clean {agent}");
            }
            let next = apply(state, action).unwrap();
            assert!(state.grid().contains(next.agent()));
        }
    }
}

#[test]
fn apply_is_pure() {
    for state in reference_space().states() {
        let before = state.clone();
        for action in Action::ALL {
            let first = apply(state, action);
            let second = apply(state, action);
            assert_eq!(first, second);
            assert_eq!(*state, before);
        }
    }
}

#[test]
fn heuristics_are_non_negative_and_zero_only_at_goal() {
    for state in reference_space().states() {
        for value in [h1(state), h2(state)] {
            assert!(value >= 0);
            assert_eq!(value == 0, state.is_clean(), "at {state}");
        }
    }
}

#[test]
fn no_state_is_expanded_twice() {
    for scenario in reference_scenarios() {
        let root = scenario.initial_state().unwrap();
        let result = search(
            root,
            &VacuumWorld,
            scenario.heuristic.heuristic(),
            &SearchPolicy::default(),
        )
        .unwrap();
        let mut seen = BTreeSet::new();
        for event in &result.graph.expansions {
            assert!(
                seen.insert(event.state_fingerprint.clone()),
                "{}: state {} expanded twice",
                scenario.name,
                event.state_fingerprint
            );
        }
    }
}

#[test]
fn expansion_f_costs_never_decrease() {
    for scenario in reference_scenarios() {
        let result = search(
            scenario.initial_state().unwrap(),
            &VacuumWorld,
            scenario.heuristic.heuristic(),
            &SearchPolicy::default(),
        )
        .unwrap();
        let pops: Vec<i64> = result
            .graph
            .expansions
            .iter()
            .map(|e| e.frontier_pop_key.f_cost)
            .collect();
        assert!(
            pops.windows(2).all(|w| w[0] <= w[1]),
            "{}: pop order {pops:?}",
            scenario.name
        );
    }
}

#[test]
fn path_g_equals_step_index_and_f_is_monotone() {
    for scenario in reference_scenarios() {
        let result = search(
            scenario.initial_state().unwrap(),
            &VacuumWorld,
            scenario.heuristic.heuristic(),
            &SearchPolicy::default(),
        )
        .unwrap();
        let solution = result.solution().unwrap();
        for (i, g) in solution.g_values.iter().enumerate() {
            assert_eq!(*g, i as i64);
        }
        assert!(solution.f_values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(solution.f_values.last().copied(), Some(solution.cost()));
    }
}

#[test]
fn path_follows_parent_links_from_root() {
    let scenario = part_a();
    let result = search(
        scenario.initial_state().unwrap(),
        &VacuumWorld,
        scenario.heuristic.heuristic(),
        &SearchPolicy::default(),
    )
    .unwrap();
    let goal = result.goal_node.as_ref().unwrap();
    let path = sweep_search::search::reconstruct_path(&result.nodes, goal.node_id);

    assert_eq!(path.first(), Some(&0));
    assert_eq!(path.last(), Some(&goal.node_id));
    for pair in path.windows(2) {
        let child = &result.nodes[usize::try_from(pair[1]).unwrap()];
        assert_eq!(child.parent_id, Some(pair[0]));
    }
}
