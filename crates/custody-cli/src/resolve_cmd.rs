//! Resolve command: custody on individual dates.

use anyhow::Result;
use custody_engine::resolve;

use crate::cli::ResolveArgs;
use crate::report::{print_json, DayLine};
use crate::Session;

pub fn run(args: ResolveArgs, session: &Session) -> Result<()> {
    let config = &session.config;
    let lines: Vec<DayLine<'_>> = args
        .dates
        .iter()
        .map(|d| DayLine::new(config, *d, resolve(&config.schedule, *d)))
        .collect();

    if session.json {
        return print_json(&lines);
    }
    for line in &lines {
        println!("{}", line.to_text());
    }
    Ok(())
}
