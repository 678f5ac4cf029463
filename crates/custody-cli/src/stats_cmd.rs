//! Stats command: custody distribution over a date range.

use std::collections::BTreeMap;

use anyhow::{anyhow, bail, Result};
use chrono::Months;
use custody_engine::stats::CustodyStats;
use custody_engine::{aggregate, CustodianSlot, ResolutionSource};
use serde::Serialize;
use tracing::info;

use crate::cli::StatsArgs;
use crate::report::{percent, print_json};
use crate::Session;

#[derive(Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: &'a CustodyStats,
    percentages: BTreeMap<CustodianSlot, f64>,
    difference: u32,
    names: BTreeMap<CustodianSlot, &'a str>,
}

pub fn run(args: StatsArgs, session: &Session) -> Result<()> {
    if args.to < args.from {
        bail!("--to {} is before --from {}", args.to, args.from);
    }
    let limit = args
        .from
        .checked_add_months(Months::new(args.max_months))
        .ok_or_else(|| anyhow!("--max-months {} is out of range", args.max_months))?;
    if args.to >= limit {
        bail!(
            "range {} to {} exceeds the {}-month limit",
            args.from,
            args.to,
            args.max_months
        );
    }

    let config = &session.config;
    let stats = aggregate(&config.schedule, args.from, args.to);
    info!(days = stats.total_days, "statistics computed");

    if session.json {
        return print_json(&StatsReport {
            stats: &stats,
            percentages: CustodianSlot::ALL
                .iter()
                .map(|s| (*s, percent(stats.count(*s), stats.total_days)))
                .collect(),
            difference: stats.parent_difference(),
            names: CustodianSlot::ALL
                .iter()
                .map(|s| (*s, config.name_of(*s)))
                .collect(),
        });
    }

    println!(
        "Period: {} to {} ({} days)",
        stats.start, stats.end, stats.total_days
    );
    for slot in CustodianSlot::ALL {
        let count = stats.count(slot);
        println!(
            "{}: {count} days ({:.1}%)",
            config.name_of(slot),
            percent(count, stats.total_days)
        );
    }
    println!("Difference: {} days", stats.parent_difference());

    if !stats.no_custody_labels.is_empty() {
        println!("No-custody breakdown:");
        for (label, count) in &stats.no_custody_labels {
            println!("  {label}: {count} days");
        }
    }

    println!("Included events:");
    println!(
        "  special dates: {}",
        stats.source_count(ResolutionSource::SpecialDate)
    );
    println!(
        "  named period days: {}",
        stats.source_count(ResolutionSource::NamedPeriod)
    );
    println!(
        "  vacation days: {}",
        stats.source_count(ResolutionSource::Vacation)
    );
    println!("  pattern changes: {}", stats.pattern_changes_in_range);
    Ok(())
}
