//! Carrier module: grid geometry and the immutable `WorldState`.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod position;
pub mod world_state;
