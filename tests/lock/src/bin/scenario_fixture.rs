//! Binary that runs both reference scenarios and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `scenario_fixture`
//!
//! Output: one block of key=value lines per scenario, prefixed by
//! `scenario=<name>`. Diagnostics go to stderr (`RUST_LOG`).

use std::process::ExitCode;

use sweep_harness::logging;
use sweep_harness::report::RunReport;
use sweep_harness::runner::{run_scenario, RunError};
use sweep_harness::scenarios::reference_scenarios;
use sweep_search::policy::SearchPolicy;

fn main() -> ExitCode {
    logging::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "scenario run failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), RunError> {
    let policy = SearchPolicy::default();
    for scenario in reference_scenarios() {
        let run = run_scenario(&scenario, &policy)?;
        let digest = run.report.digest().map_err(|e| RunError::CanonFailed {
            detail: e.to_string(),
        })?;
        print_report(&run.report);
        println!("report_digest={digest}");
    }
    Ok(())
}

fn print_report(report: &RunReport) {
    let actions = report.actions.as_ref().map_or_else(
        || "none".to_string(),
        |acts| acts.iter().map(|a| a.as_str()).collect::<Vec<_>>().join(","),
    );
    let f_values = report
        .f_values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let cost = report
        .cost
        .map_or_else(|| "none".to_string(), |c| c.to_string());

    println!("scenario={}", report.scenario);
    println!("heuristic={}", report.heuristic);
    println!("termination_reason={}", report.termination_reason);
    println!("actions={actions}");
    println!("f_values={f_values}");
    println!("nodes_on_path={}", report.path_nodes());
    println!("expanded_count={}", report.expanded_count);
    println!("cost={cost}");
    println!("graph_digest={}", report.graph_digest);
}
