//! Explicit enumeration of a vacuum world's reachable state space.
//!
//! Small worlds (the reference scenario has 25 agent cells × 2^5 dirt
//! subsets) can be searched exhaustively, which gives exact cost-to-go
//! values to check heuristics and search results against.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use sweep_kernel::carrier::world_state::WorldState;
use sweep_kernel::operators::apply::{apply, is_goal, legal_actions};

/// The reachable state graph: every state and its successors.
#[derive(Debug)]
pub struct StateSpace {
    pub successors: BTreeMap<WorldState, Vec<WorldState>>,
}

impl StateSpace {
    /// Breadth-first enumeration from `root` over legal actions.
    ///
    /// # Panics
    ///
    /// Panics if a legal action fails to apply.
    #[must_use]
    pub fn explore(root: &WorldState) -> Self {
        let mut successors = BTreeMap::new();
        let mut queue = VecDeque::from([root.clone()]);
        while let Some(state) = queue.pop_front() {
            if successors.contains_key(&state) {
                continue;
            }
            let next: Vec<WorldState> = legal_actions(&state)
                .into_iter()
                .map(|a| apply(&state, a).expect("legal action applies"))
                .collect();
            for s in &next {
                if !successors.contains_key(s) {
                    queue.push_back(s.clone());
                }
            }
            successors.insert(state, next);
        }
        Self { successors }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    pub fn states(&self) -> impl Iterator<Item = &WorldState> {
        self.successors.keys()
    }

    /// Exact minimal cost from every state to the nearest goal.
    ///
    /// Backward breadth-first search from all goal states over reversed
    /// edges; every action costs 1. States that cannot reach a goal are
    /// absent from the map.
    #[must_use]
    pub fn cost_to_go(&self) -> BTreeMap<WorldState, i64> {
        let mut predecessors: BTreeMap<&WorldState, BTreeSet<&WorldState>> = BTreeMap::new();
        for (from, next) in &self.successors {
            for to in next {
                predecessors.entry(to).or_default().insert(from);
            }
        }

        let mut cost: BTreeMap<WorldState, i64> = BTreeMap::new();
        let mut queue: VecDeque<&WorldState> = VecDeque::new();
        for state in self.states().filter(|s| is_goal(s)) {
            cost.insert(state.clone(), 0);
            queue.push_back(state);
        }
        while let Some(state) = queue.pop_front() {
            let c = cost[state];
            for &prev in predecessors.get(state).into_iter().flatten() {
                if !cost.contains_key(prev) {
                    cost.insert(prev.clone(), c + 1);
                    queue.push_back(prev);
                }
            }
        }
        cost
    }
}
