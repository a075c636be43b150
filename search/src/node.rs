//! Core search node type and frontier ordering key.

use sweep_kernel::carrier::world_state::WorldState;
use sweep_kernel::operators::action::Action;
use sweep_kernel::proof::hash::{canonical_hash, ContentHash};
use sweep_kernel::proof::hash_domain::HashDomain;

/// An immutable search node.
///
/// Nodes live in an arena indexed by `node_id`; `parent_id` points back into
/// the same arena, so the backpointer structure is a tree with no cycles.
/// Nodes are never mutated after construction.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Arena index, assigned in creation order starting at 0 for the root.
    pub node_id: u64,
    /// Parent node ID (`None` for root).
    pub parent_id: Option<u64>,
    /// Full immutable state at this node.
    pub state: WorldState,
    /// Canonical hash of the state's identity bytes (visited-set key).
    pub state_fingerprint: ContentHash,
    /// Tree depth (root = 0). Equal to `g_cost` under unit action costs.
    pub depth: u32,
    /// Cumulative path cost (+1 per action).
    pub g_cost: i64,
    /// Heuristic estimate at `state`.
    pub h_cost: i64,
    /// Global counter for deterministic tie-breaking.
    pub creation_order: u64,
    /// The action that produced this node from its parent (`None` for root).
    pub producing_action: Option<Action>,
}

impl SearchNode {
    /// Compute `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// Fingerprint of a state: `canonical_hash(WorldStateIdentity, identity_bytes)`.
///
/// Equal states always share a fingerprint; this is the canonical key used
/// by the visited set.
#[must_use]
pub fn state_fingerprint(state: &WorldState) -> ContentHash {
    canonical_hash(HashDomain::WorldStateIdentity, &state.identity_bytes())
}

/// The frontier ordering key: `(f_cost, creation_order)`.
///
/// Lower `f_cost` first; among equal `f_cost`, the node created first pops
/// first (FIFO).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            f_cost: node.f_cost(),
            creation_order: node.creation_order,
        }
    }
}
