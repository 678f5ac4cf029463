use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Custody calendar resolution.
#[derive(Parser)]
#[command(
    name = "custody",
    version,
    about = "Resolve custody calendars and print custody statistics"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the JSON configuration document; `-` reads stdin.
    /// Without it the default configuration is used.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Date substituted for unparsable stored dates (default: the local date).
    #[arg(long, global = true, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve who has custody on one or more dates.
    Resolve(ResolveArgs),
    /// Print every day of a month with per-parent totals.
    Month(MonthArgs),
    /// Print custody statistics over a date range.
    Stats(StatsArgs),
    /// Print Easter and Christmas period suggestions for a year.
    Holidays(HolidaysArgs),
}

/// Arguments for the `resolve` subcommand.
#[derive(clap::Args)]
pub struct ResolveArgs {
    /// Dates to resolve (YYYY-MM-DD).
    #[arg(required = true, value_parser = parse_date)]
    pub dates: Vec<NaiveDate>,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Month to print (YYYY-MM).
    #[arg(value_parser = parse_month)]
    pub month: YearMonth,
}

/// Arguments for the `stats` subcommand.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// First day of the range (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub from: NaiveDate,

    /// Last day of the range, inclusive (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub to: NaiveDate,

    /// Longest range accepted, in months.
    #[arg(long, default_value_t = 12)]
    pub max_months: u32,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Calendar year.
    pub year: i32,
}

/// A calendar month parsed from `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_month(s: &str) -> Result<YearMonth, String> {
    let (year, month) = s
        .split_once('-')
        .ok_or_else(|| "expected YYYY-MM".to_string())?;
    let year: i32 = year
        .parse()
        .map_err(|e| format!("invalid year {year:?}: {e}"))?;
    let month: u32 = month
        .parse()
        .map_err(|e| format!("invalid month {month:?}: {e}"))?;
    if !(1..=12).contains(&month) {
        return Err(format!("month must be 1-12, got {month}"));
    }
    Ok(YearMonth { year, month })
}
