//! Sweep Search: deterministic A* over vacuum-world states with an auditable graph artifact.
//!
//! This crate provides the search layer. It depends only on `sweep_kernel`;
//! it does NOT depend on `sweep_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! sweep_kernel  ←  sweep_search  ←  sweep_harness
//! (state, apply)   (frontier, A*)    (scenarios, reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`](node::SearchNode) -- immutable arena node with backpointer
//! - [`BestFirstFrontier`](frontier::BestFirstFrontier) -- open list + closed list
//! - [`Heuristic`](heuristic::Heuristic) -- pluggable remaining-cost estimate (h1, h2)
//! - [`SearchGraph`](graph::SearchGraph) -- expansion-event audit log
//! - [`SearchPolicy`](policy::SearchPolicy) -- search budgets
//! - [`SearchWorld`](contract::SearchWorld) -- trait for searchable worlds

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod search;
