//! Harness runner: drives a scenario through the search and builds its report.
//!
//! # Pipeline
//!
//! ```text
//! scenario.initial_state() → search() → graph.digest() → RunReport
//! ```

use tracing::info;

use sweep_kernel::carrier::world_state::WorldError;
use sweep_search::contract::{SearchWorld, VacuumWorld};
use sweep_search::error::SearchError;
use sweep_search::policy::SearchPolicy;
use sweep_search::search::{search, SearchResult};

use crate::report::RunReport;
use crate::scenarios::Scenario;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The scenario's initial state is invalid.
    InvalidScenario(WorldError),
    /// Search pre-flight failed.
    Search(SearchError),
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScenario(e) => write!(f, "invalid scenario: {e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::CanonFailed { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<WorldError> for RunError {
    fn from(e: WorldError) -> Self {
        Self::InvalidScenario(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// A completed run: the report plus the full search result it summarizes.
#[derive(Debug)]
pub struct ScenarioRun {
    pub report: RunReport,
    pub result: SearchResult,
}

/// Run a scenario in the vacuum world.
///
/// # Errors
///
/// Returns [`RunError`] if the scenario is invalid, the policy is rejected,
/// or the graph cannot be serialized.
pub fn run_scenario(scenario: &Scenario, policy: &SearchPolicy) -> Result<ScenarioRun, RunError> {
    run_scenario_in(scenario, &VacuumWorld, policy)
}

/// Run a scenario in an arbitrary search world.
///
/// # Errors
///
/// See [`run_scenario`].
pub fn run_scenario_in(
    scenario: &Scenario,
    world: &dyn SearchWorld,
    policy: &SearchPolicy,
) -> Result<ScenarioRun, RunError> {
    let root = scenario.initial_state()?;
    let heuristic = scenario.heuristic.heuristic();
    let result = search(root, world, heuristic, policy)?;

    let graph_digest = result.graph.digest().map_err(|e| RunError::CanonFailed {
        detail: e.to_string(),
    })?;
    let solution = result.solution();
    let meta = &result.graph.metadata;

    let report = RunReport {
        scenario: scenario.name.clone(),
        world_id: meta.world_id.clone(),
        heuristic: meta.heuristic.clone(),
        grid_size: scenario.grid_size,
        agent: scenario.agent,
        dirty: root_dirty(scenario),
        termination_reason: meta.termination_reason.as_str().to_string(),
        cost: solution.as_ref().map(sweep_search::search::Solution::cost),
        f_values: solution
            .as_ref()
            .map(|s| s.f_values.clone())
            .unwrap_or_default(),
        actions: solution.map(|s| s.actions),
        expanded_count: result.expanded_count(),
        total_expansions: meta.total_expansions,
        graph_digest,
    };

    info!(
        scenario = %report.scenario,
        heuristic = %report.heuristic,
        termination = %report.termination_reason,
        cost = ?report.cost,
        expanded = report.expanded_count,
        "scenario finished"
    );

    Ok(ScenarioRun { report, result })
}

/// Dirty cells in canonical order, deduplicated.
fn root_dirty(scenario: &Scenario) -> Vec<sweep_kernel::carrier::position::Position> {
    let mut cells = scenario.dirty.clone();
    cells.sort();
    cells.dedup();
    cells
}
