//! Sweep Kernel: the deterministic core of the vacuum-world search engine.
//!
//! # API Surface
//!
//! - [`carrier::world_state::WorldState`] -- immutable world configuration
//!   (agent position + dirty cells) with a canonical identity encoding
//! - [`operators::apply::legal_actions`] -- the legal action set at a state
//! - [`operators::apply::apply`] -- the deterministic transition function
//! - [`proof::hash::canonical_hash`] -- domain-separated content hashing
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators`; `proof` stands alone.
//!
//! One-way only. No cycles. `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
