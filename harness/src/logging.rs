//! Diagnostic tracing for binaries.
//!
//! Output goes to stderr so fixture stdout stays byte-stable across runs.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// Reads `RUST_LOG`; defaults to `warn`. Calling twice is a no-op.
///
/// ```bash
/// RUST_LOG=sweep_search=trace cargo run -p lock-tests --bin scenario_fixture
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
