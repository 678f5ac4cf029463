//! Diagnostics for the `custody` binary.
//!
//! Only two targets log: the binary itself (`custody`) and the engine
//! (`custody_engine`). The engine emits `warn!` for substituted config
//! values, `debug!` for aggregation summaries and `trace!` per resolved
//! date, so one `-v` step reveals each layer in turn. Everything goes to
//! stderr; stdout carries only the report.

use tracing::Level;
use tracing_subscriber::EnvFilter;

const TARGETS: [&str; 2] = ["custody", "custody_engine"];

/// `-v` count to level: none shows config warnings only, `-vvv` shows
/// every resolved date.
fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Filter directives for our targets only, so dependency noise stays out.
fn directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    TARGETS.map(|target| format!("{target}={level}")).join(",")
}

/// Install the stderr subscriber. A set `RUST_LOG` wins over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
