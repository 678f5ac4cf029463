mod cli;
mod holidays_cmd;
mod input;
mod logging;
mod month_cmd;
mod report;
mod resolve_cmd;
mod stats_cmd;

use std::process;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use custody_engine::LoadedConfig;

use crate::cli::{Cli, Command};

/// Loaded configuration plus output options, shared by every command.
pub struct Session {
    pub config: LoadedConfig,
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let session = Session {
        config: input::load(cli.config.as_deref(), today)?,
        json: cli.json,
    };

    match cli.command {
        Command::Resolve(args) => resolve_cmd::run(args, &session),
        Command::Month(args) => month_cmd::run(args, &session),
        Command::Stats(args) => stats_cmd::run(args, &session),
        Command::Holidays(args) => holidays_cmd::run(args, &session),
    }
}
