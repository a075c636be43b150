//! Best-first frontier (open list) with an expanded-state closed list.
//!
//! The open list holds node ids keyed by [`FrontierKey`]; nodes themselves
//! stay in the search arena. The same state may sit in the open list several
//! times with different costs: admission never deduplicates. Only expansion
//! marks a state as visited.
//!
//! Uses a `BTreeSet` closed list (not `HashSet`) for deterministic iteration
//! order at serialization boundaries.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use crate::node::FrontierKey;

/// A frontier entry: ordering key plus arena index.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: u64,
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best node
/// - A `BTreeSet<String>` of expanded state fingerprint hex digests
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    visited: BTreeSet<String>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            visited: BTreeSet::new(),
            high_water: 0,
        }
    }

    /// Admit a node to the open list.
    pub fn push(&mut self, key: FrontierKey, node_id: u64) {
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node_id,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best (lowest key) entry.
    pub fn pop(&mut self) -> Option<(FrontierKey, u64)> {
        self.heap.pop().map(|e| (e.key.0, e.node_id))
    }

    /// Record a fingerprint as expanded.
    ///
    /// Returns `false` if it was already in the closed list.
    pub fn mark_expanded(&mut self, fingerprint_hex: &str) -> bool {
        self.visited.insert(fingerprint_hex.to_string())
    }

    /// Check if a fingerprint has been expanded.
    #[must_use]
    pub fn is_visited(&self, fingerprint_hex: &str) -> bool {
        self.visited.contains(fingerprint_hex)
    }

    /// Current open-list size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the open list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of open-list size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for BestFirstFrontier {
    fn default() -> Self {
        Self::new()
    }
}
