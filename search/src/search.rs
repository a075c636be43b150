//! A* entry point, expansion loop and path reconstruction.
//!
//! # Step ordering
//!
//! 1. Pop the lowest `(f_cost, creation_order)` entry.
//! 2. If its state is a goal, stop: the path to it is the answer.
//! 3. If its state was already expanded (it was admitted twice and the
//!    cheaper copy went first), discard it.
//! 4. Mark the state expanded, then generate one successor per legal action,
//!    skipping successors whose state is already expanded.
//!
//! Admission never checks the open list, so a state may be queued several
//! times with different `g_cost`; whichever pops first wins. With an
//! admissible, consistent heuristic the first pop is the cheapest.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use sweep_kernel::carrier::position::Position;
use sweep_kernel::carrier::world_state::WorldState;
use sweep_kernel::operators::action::Action;

use crate::contract::{SearchWorld, VacuumWorld};
use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::graph::{
    CandidateOutcome, CandidateRecord, ExpandEvent, FrontierPopKey, NodeSummary, SearchGraph,
    SearchGraphMetadata, TerminationReason,
};
use crate::heuristic::Heuristic;
use crate::node::{state_fingerprint, FrontierKey, SearchNode};
use crate::policy::SearchPolicy;

/// Result of a search execution.
///
/// Always contains a complete `SearchGraph` audit trail regardless of how
/// the search terminated. Check [`SearchResult::is_goal_reached`] or inspect
/// `graph.metadata.termination_reason` to determine the outcome.
#[derive(Debug)]
pub struct SearchResult {
    /// The goal node (if found).
    pub goal_node: Option<SearchNode>,
    /// The complete search graph audit trail.
    pub graph: SearchGraph,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: Vec<SearchNode>,
}

impl SearchResult {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }

    /// Number of successor nodes admitted to the frontier (root excluded).
    #[must_use]
    pub fn expanded_count(&self) -> u64 {
        self.graph.metadata.total_nodes_generated
    }

    /// Action and f-value sequences from the root to the goal, if one was reached.
    #[must_use]
    pub fn solution(&self) -> Option<Solution> {
        let goal = self.goal_node.as_ref()?;
        Some(Solution::from_path(
            &self.nodes,
            &reconstruct_path(&self.nodes, goal.node_id),
        ))
    }

    /// Flatten into the plain outcome shape returned by [`run_search`].
    #[must_use]
    pub fn outcome(&self) -> SearchOutcome {
        let solution = self.solution();
        SearchOutcome {
            f_values: solution
                .as_ref()
                .map(|s| s.f_values.clone())
                .unwrap_or_default(),
            actions: solution.map(|s| s.actions),
            expanded_count: self.expanded_count(),
            termination_reason: self.graph.metadata.termination_reason.clone(),
        }
    }
}

/// An ordered plan from the initial state to a goal.
///
/// The root has no producing action, so it contributes an f value but no
/// action: `f_values.len() == actions.len() + 1`, and `f_values[0]` is the
/// root's heuristic estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub actions: Vec<Action>,
    pub f_values: Vec<i64>,
    /// `g_cost` of each node on the path; `g_values[i] == i`.
    pub g_values: Vec<i64>,
}

impl Solution {
    fn from_path(nodes: &[SearchNode], path: &[u64]) -> Self {
        let mut actions = Vec::with_capacity(path.len().saturating_sub(1));
        let mut f_values = Vec::with_capacity(path.len());
        let mut g_values = Vec::with_capacity(path.len());
        for node in path.iter().filter_map(|&id| node_at(nodes, id)) {
            if let Some(action) = node.producing_action {
                actions.push(action);
            }
            f_values.push(node.f_cost());
            g_values.push(node.g_cost);
        }
        Self {
            actions,
            f_values,
            g_values,
        }
    }

    /// Total path cost (every action costs 1).
    #[must_use]
    pub fn cost(&self) -> i64 {
        self.g_values.last().copied().unwrap_or(0)
    }

    /// Number of nodes on the path, root included.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.f_values.len()
    }

    /// Number of `Suck` actions in the plan.
    #[must_use]
    pub fn suck_count(&self) -> usize {
        self.actions.iter().filter(|a| **a == Action::Suck).count()
    }
}

/// Plain search outcome: action sequence (absent when no path exists),
/// f-value sequence, and the count of nodes admitted to the frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub actions: Option<Vec<Action>>,
    pub f_values: Vec<i64>,
    pub expanded_count: u64,
    pub termination_reason: TerminationReason,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.actions.is_some()
    }
}

/// Build the initial vacuum world and run A* over it with the default policy.
///
/// # Errors
///
/// Returns [`SearchError::InvalidWorld`] if the grid size is zero or any
/// position lies outside the grid. Nothing is searched in that case.
pub fn run_search(
    grid_size: u32,
    initial_dirty: impl IntoIterator<Item = Position>,
    initial_agent: Position,
    heuristic: &dyn Heuristic,
) -> Result<SearchOutcome, SearchError> {
    let root = WorldState::with_grid_size(grid_size, initial_agent, initial_dirty)?;
    let result = search(root, &VacuumWorld, heuristic, &SearchPolicy::default())?;
    Ok(result.outcome())
}

/// Run A* from the root state.
///
/// All runtime terminations (goal, exhaustion, budget) return
/// `Ok(SearchResult)` with the audit trail preserved. The
/// `termination_reason` field in the graph metadata indicates why the search
/// stopped.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures.
#[allow(clippy::too_many_lines)]
pub fn search(
    root_state: WorldState,
    world: &dyn SearchWorld,
    heuristic: &dyn Heuristic,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    policy.validate()?;

    let mut frontier = BestFirstFrontier::new();
    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut expansions: Vec<ExpandEvent> = Vec::new();
    let mut expansion_of: BTreeMap<u64, u64> = BTreeMap::new();
    let mut expansion_count: u64 = 0;
    let mut total_nodes_generated: u64 = 0;
    let mut total_duplicates_suppressed: u64 = 0;
    let mut total_stale_pops: u64 = 0;
    let mut total_apply_failures: u64 = 0;

    let root_fp = state_fingerprint(&root_state);
    let root_fp_hex = root_fp.hex_digest().to_string();
    let root = SearchNode {
        node_id: 0,
        parent_id: None,
        h_cost: heuristic.estimate(&root_state),
        state: root_state,
        state_fingerprint: root_fp,
        depth: 0,
        g_cost: 0,
        creation_order: 0,
        producing_action: None,
    };
    debug!(
        world_id = world.world_id(),
        heuristic = heuristic.name(),
        root = %root.state,
        h = root.h_cost,
        "search started"
    );
    frontier.push(FrontierKey::from(&root), root.node_id);
    nodes.push(root);

    let termination_reason = loop {
        let Some((pop_key, node_id)) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };
        let Some(popped) = node_at(&nodes, node_id) else {
            break TerminationReason::FrontierInvariantViolation;
        };

        if world.is_goal(&popped.state) {
            break TerminationReason::GoalReached { node_id };
        }

        let current_fp_hex = popped.state_fingerprint.hex_digest().to_string();
        if frontier.is_visited(&current_fp_hex) {
            total_stale_pops += 1;
            trace!(node_id, f = pop_key.f_cost, "discarding stale frontier entry");
            continue;
        }

        if expansion_count >= policy.max_expansions {
            break TerminationReason::ExpansionBudgetExceeded;
        }
        frontier.mark_expanded(&current_fp_hex);
        // Successors are pushed into `nodes` below, so copy out what expansion needs.
        let state = popped.state.clone();
        let (depth, g_cost) = (popped.depth, popped.g_cost);

        let mut candidates = Vec::new();
        for (index, action) in world.legal_actions(&state).into_iter().enumerate() {
            let index = index as u64;
            if depth >= policy.max_depth {
                candidates.push(CandidateRecord {
                    index,
                    action,
                    outcome: CandidateOutcome::SkippedByDepthLimit,
                });
                continue;
            }

            let next_state = match world.apply(&state, action) {
                Ok(state) => state,
                Err(fail) => {
                    total_apply_failures += 1;
                    candidates.push(CandidateRecord {
                        index,
                        action,
                        outcome: CandidateOutcome::ApplyFailed {
                            detail: fail.to_string(),
                        },
                    });
                    continue;
                }
            };

            // Closed-list check only: open-list duplicates are admitted.
            let child_fp = state_fingerprint(&next_state);
            if frontier.is_visited(child_fp.hex_digest()) {
                total_duplicates_suppressed += 1;
                candidates.push(CandidateRecord {
                    index,
                    action,
                    outcome: CandidateOutcome::DuplicateSuppressed {
                        existing_fingerprint: child_fp.hex_digest().to_string(),
                    },
                });
                continue;
            }

            let child_id = nodes.len() as u64;
            let child = SearchNode {
                node_id: child_id,
                parent_id: Some(node_id),
                h_cost: heuristic.estimate(&next_state),
                state: next_state,
                state_fingerprint: child_fp,
                depth: depth + 1,
                g_cost: g_cost + 1,
                creation_order: child_id,
                producing_action: Some(action),
            };
            candidates.push(CandidateRecord {
                index,
                action,
                outcome: CandidateOutcome::Applied {
                    to_node: child_id,
                    h_cost: child.h_cost,
                },
            });
            frontier.push(FrontierKey::from(&child), child_id);
            nodes.push(child);
            total_nodes_generated += 1;
        }

        trace!(
            expansion = expansion_count,
            node_id,
            f = pop_key.f_cost,
            g = g_cost,
            frontier = frontier.len(),
            "expanded node"
        );
        expansions.push(ExpandEvent {
            expansion_order: expansion_count,
            node_id,
            state_fingerprint: current_fp_hex,
            frontier_pop_key: FrontierPopKey {
                f_cost: pop_key.f_cost,
                creation_order: pop_key.creation_order,
            },
            candidates,
        });
        expansion_of.insert(node_id, expansion_count);
        expansion_count += 1;
    };

    debug!(
        reason = termination_reason.as_str(),
        expansions = expansion_count,
        generated = total_nodes_generated,
        stale_pops = total_stale_pops,
        "search finished"
    );

    let goal_node = match &termination_reason {
        TerminationReason::GoalReached { node_id } => node_at(&nodes, *node_id).cloned(),
        _ => None,
    };

    let node_summaries = nodes
        .iter()
        .map(|n| NodeSummary {
            node_id: n.node_id,
            parent_id: n.parent_id,
            producing_action: n.producing_action,
            state_fingerprint: n.state_fingerprint.hex_digest().to_string(),
            depth: n.depth,
            g_cost: n.g_cost,
            h_cost: n.h_cost,
            f_cost: n.f_cost(),
            is_goal: matches!(
                &termination_reason,
                TerminationReason::GoalReached { node_id } if *node_id == n.node_id
            ),
            expansion_order: expansion_of.get(&n.node_id).copied(),
        })
        .collect();

    let graph = SearchGraph {
        expansions,
        node_summaries,
        metadata: SearchGraphMetadata {
            world_id: world.world_id().to_string(),
            heuristic: heuristic.name().to_string(),
            root_state_fingerprint: root_fp_hex,
            policy: policy.to_json_value(),
            total_expansions: expansion_count,
            total_nodes_generated,
            total_duplicates_suppressed,
            total_stale_pops,
            total_apply_failures,
            termination_reason,
            frontier_high_water: frontier.high_water(),
        },
    };

    Ok(SearchResult {
        goal_node,
        graph,
        nodes,
    })
}

/// Reconstruct the node-id path from root to a goal node.
///
/// Walks `parent_id` links back from `goal_node_id`, then reverses, so the
/// result reads root first.
#[must_use]
pub fn reconstruct_path(nodes: &[SearchNode], goal_node_id: u64) -> Vec<u64> {
    let mut path = Vec::new();
    let mut current_id = Some(goal_node_id);

    while let Some(id) = current_id {
        let Some(node) = node_at(nodes, id) else {
            break;
        };
        path.push(id);
        current_id = node.parent_id;
    }

    path.reverse();
    path
}

fn node_at(nodes: &[SearchNode], node_id: u64) -> Option<&SearchNode> {
    usize::try_from(node_id).ok().and_then(|i| nodes.get(i))
}
