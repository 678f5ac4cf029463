//! Month command: a day-by-day listing of one calendar month.

use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use custody_engine::calendar::last_day_of_month;
use custody_engine::{aggregate, resolve_range, CustodianSlot};
use serde::Serialize;

use crate::cli::MonthArgs;
use crate::report::{print_json, DayLine};
use crate::Session;

#[derive(Serialize)]
struct MonthReport<'a> {
    month: String,
    days: Vec<DayLine<'a>>,
    totals: BTreeMap<CustodianSlot, u32>,
}

pub fn run(args: MonthArgs, session: &Session) -> Result<()> {
    let MonthArgs { month } = args;
    let (first, last) = NaiveDate::from_ymd_opt(month.year, month.month, 1)
        .zip(last_day_of_month(month.year, month.month))
        .ok_or_else(|| anyhow!("month {}-{:02} is out of range", month.year, month.month))?;

    let config = &session.config;
    let days: Vec<DayLine<'_>> = resolve_range(&config.schedule, first, last)
        .map(|(d, r)| DayLine::new(config, d, r))
        .collect();
    let stats = aggregate(&config.schedule, first, last);

    if session.json {
        return print_json(&MonthReport {
            month: format!("{}-{:02}", month.year, month.month),
            days,
            totals: stats.by_custodian,
        });
    }

    for line in &days {
        println!("{}", line.to_text());
    }
    println!();
    for slot in CustodianSlot::ALL {
        let count = stats.count(slot);
        if slot.is_none() && count == 0 {
            continue;
        }
        println!("{}: {count} days", config.name_of(slot));
    }
    Ok(())
}
