//! `SearchGraph`: expansion-event audit log.
//!
//! The normative decision surface is the ordered list of `ExpandEvent`
//! entries. Node summaries are a derived index for path reconstruction.

use sweep_kernel::operators::action::Action;
use sweep_kernel::proof::canon::{canonical_json_bytes, CanonError};
use sweep_kernel::proof::hash::{canonical_hash, ContentHash};
use sweep_kernel::proof::hash_domain::HashDomain;

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraph {
    /// Ordered expansion events (normative decision surface).
    pub expansions: Vec<ExpandEvent>,
    /// Derived node index sorted by `node_id` ascending.
    pub node_summaries: Vec<NodeSummary>,
    /// Aggregate metadata.
    pub metadata: SearchGraphMetadata,
}

/// A single frontier-pop + successor-generation event.
#[derive(Debug, Clone)]
pub struct ExpandEvent {
    /// Total order of expansions.
    pub expansion_order: u64,
    /// The node being expanded.
    pub node_id: u64,
    /// Hex fingerprint of the expanded node's state.
    pub state_fingerprint: String,
    /// The frontier key at time of pop.
    pub frontier_pop_key: FrontierPopKey,
    /// Ordered candidate decision log, one record per legal action.
    pub candidates: Vec<CandidateRecord>,
}

/// The frontier ordering key recorded at pop time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierPopKey {
    pub f_cost: i64,
    pub creation_order: u64,
}

/// A candidate action with its outcome.
#[derive(Debug, Clone)]
pub struct CandidateRecord {
    /// Index in the legal-action list.
    pub index: u64,
    pub action: Action,
    pub outcome: CandidateOutcome,
}

/// Outcome of processing a candidate during expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// Applied; created a new node and admitted it to the frontier.
    Applied { to_node: u64, h_cost: i64 },
    /// Successor state was already expanded (closed-list hit).
    DuplicateSuppressed { existing_fingerprint: String },
    /// The world's `apply()` failed.
    ApplyFailed { detail: String },
    /// Skipped because the child would exceed `max_depth`.
    SkippedByDepthLimit,
}

/// Derived node summary for path reconstruction.
#[derive(Debug, Clone)]
pub struct NodeSummary {
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub producing_action: Option<Action>,
    pub state_fingerprint: String,
    pub depth: u32,
    pub g_cost: i64,
    pub h_cost: i64,
    pub f_cost: i64,
    pub is_goal: bool,
    pub expansion_order: Option<u64>,
}

/// Aggregate metadata.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    pub world_id: String,
    pub heuristic: String,
    pub root_state_fingerprint: String,
    pub policy: serde_json::Value,

    // Counters
    /// Frontier pops that generated successors.
    pub total_expansions: u64,
    /// Successor nodes admitted to the frontier (root excluded).
    pub total_nodes_generated: u64,
    pub total_duplicates_suppressed: u64,
    /// Pops of a state that had already been expanded via a cheaper entry.
    pub total_stale_pops: u64,
    pub total_apply_failures: u64,
    pub termination_reason: TerminationReason,
    pub frontier_high_water: u64,
}

/// Why the search terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal state was popped from the frontier.
    GoalReached { node_id: u64 },
    /// Frontier emptied without finding a goal.
    FrontierExhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
    /// The frontier handed back a node id missing from the arena.
    FrontierInvariantViolation,
}

impl TerminationReason {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::FrontierInvariantViolation => "frontier_invariant_violation",
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraph {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self
                .node_summaries
                .iter()
                .map(node_summary_to_json)
                .collect::<Vec<_>>(),
        })
    }
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "candidates": e.candidates.iter().map(candidate_record_to_json).collect::<Vec<_>>(),
        "expansion_order": e.expansion_order,
        "frontier_pop_key": {
            "creation_order": e.frontier_pop_key.creation_order,
            "f_cost": e.frontier_pop_key.f_cost,
        },
        "node_id": e.node_id,
        "state_fingerprint": e.state_fingerprint,
    })
}

fn candidate_record_to_json(r: &CandidateRecord) -> serde_json::Value {
    serde_json::json!({
        "action": r.action.as_str(),
        "index": r.index,
        "outcome": outcome_to_json(&r.outcome),
    })
}

fn outcome_to_json(o: &CandidateOutcome) -> serde_json::Value {
    match o {
        CandidateOutcome::Applied { to_node, h_cost } => {
            serde_json::json!({"h_cost": h_cost, "to_node": to_node, "type": "applied"})
        }
        CandidateOutcome::DuplicateSuppressed {
            existing_fingerprint,
        } => {
            serde_json::json!({
                "existing_fingerprint": existing_fingerprint,
                "type": "duplicate_suppressed",
            })
        }
        CandidateOutcome::ApplyFailed { detail } => {
            serde_json::json!({"detail": detail, "type": "apply_failed"})
        }
        CandidateOutcome::SkippedByDepthLimit => {
            serde_json::json!({"type": "skipped_by_depth_limit"})
        }
    }
}

fn node_summary_to_json(n: &NodeSummary) -> serde_json::Value {
    serde_json::json!({
        "depth": n.depth,
        "expansion_order": n.expansion_order,
        "f_cost": n.f_cost,
        "g_cost": n.g_cost,
        "h_cost": n.h_cost,
        "is_goal": n.is_goal,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
        "producing_action": n.producing_action.map(Action::as_str),
        "state_fingerprint": n.state_fingerprint,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "heuristic": m.heuristic,
        "policy": m.policy,
        "root_state_fingerprint": m.root_state_fingerprint,
        "termination_reason": termination_reason_to_json(&m.termination_reason),
        "total_apply_failures": m.total_apply_failures,
        "total_duplicates_suppressed": m.total_duplicates_suppressed,
        "total_expansions": m.total_expansions,
        "total_nodes_generated": m.total_nodes_generated,
        "total_stale_pops": m.total_stale_pops,
        "world_id": m.world_id,
    })
}

fn termination_reason_to_json(r: &TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": r.as_str()})
        }
        TerminationReason::FrontierExhausted
        | TerminationReason::ExpansionBudgetExceeded
        | TerminationReason::FrontierInvariantViolation => {
            serde_json::json!({"type": r.as_str()})
        }
    }
}
