//! Sweep Harness: scenario-level orchestration for the search engine.
//!
//! The harness runs a fixed scenario through `sweep_search::search::search`
//! and packages the result as a canonical run report. Reports and their
//! digests live in memory only.
//!
//! The harness does NOT implement search logic. It delegates to the search
//! crate. Scenarios provide problem data only; the harness owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod logging;
pub mod report;
pub mod runner;
pub mod scenarios;
