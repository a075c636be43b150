//! Shared helpers for the lock tests.

pub mod state_space;
