//! Operators module: the action vocabulary and the transition function.
//!
//! Depends on `carrier`. The search layer reaches the world model only
//! through [`apply::legal_actions`], [`apply::apply`] and [`apply::is_goal`].

pub mod action;
pub mod apply;
