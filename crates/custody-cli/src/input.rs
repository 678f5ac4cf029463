//! Loading the configuration document the commands run against.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use custody_engine::{load_config, LoadedConfig};
use tracing::info;

/// Read and validate the configuration at `path`, `-` for stdin.
///
/// Without a path the default document is used.
pub fn load(path: Option<&Path>, today: NaiveDate) -> Result<LoadedConfig> {
    let json = match path {
        None => {
            info!("no configuration given, using defaults");
            "{}".to_string()
        }
        Some(p) if p == Path::new("-") => {
            io::read_to_string(io::stdin()).context("failed to read configuration from stdin")?
        }
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read config file: {}", p.display()))?,
    };
    let config = load_config(&json, today).context("failed to parse configuration")?;
    info!(
        start = %config.schedule.base.start_date,
        pattern = config.schedule.base.pattern.name(),
        "configuration loaded"
    );
    Ok(config)
}
