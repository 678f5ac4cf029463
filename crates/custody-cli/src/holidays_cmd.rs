//! Holidays command: Easter and Christmas suggestions for a year.
//!
//! Suggested periods are assigned with the configured summer rule, so the
//! parent who opens the summer also gets holy week and the first half of
//! Christmas.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use custody_engine::holidays::{named_christmas_halves, named_holy_week};
use custody_engine::{easter_sunday, NamedPeriod, Parent, YearParityRule};
use serde::Serialize;

use crate::cli::HolidaysArgs;
use crate::report::print_json;
use crate::Session;

#[derive(Serialize)]
struct HolidaysReport<'a> {
    year: i32,
    easter_sunday: NaiveDate,
    periods: Vec<SuggestedPeriod<'a>>,
}

#[derive(Serialize)]
struct SuggestedPeriod<'a> {
    label: String,
    start: NaiveDate,
    end: NaiveDate,
    parent: u8,
    name: &'a str,
}

pub fn run(args: HolidaysArgs, session: &Session) -> Result<()> {
    let year = args.year;
    let out_of_range = || anyhow!("year {year} is out of range");
    let config = &session.config;
    let (first, rule) = config
        .schedule
        .vacation
        .as_ref()
        .map_or((Parent::Parent1, YearParityRule::Always), |v| {
            (v.first_custodian, v.year_parity)
        });

    let easter = easter_sunday(year).ok_or_else(out_of_range)?;
    let holy_week = named_holy_week(year, first, rule).ok_or_else(out_of_range)?;
    let [christmas1, christmas2] =
        named_christmas_halves(year, first, rule).ok_or_else(out_of_range)?;

    let periods: Vec<SuggestedPeriod<'_>> = [holy_week, christmas1, christmas2]
        .iter()
        .map(|p: &NamedPeriod| SuggestedPeriod {
            label: p.label().to_string(),
            start: p.start(),
            end: p.end(),
            parent: p.custodian().number(),
            name: config.name_of(p.custodian()),
        })
        .collect();

    if session.json {
        return print_json(&HolidaysReport {
            year,
            easter_sunday: easter,
            periods,
        });
    }

    println!("Easter Sunday: {easter}");
    for p in &periods {
        println!("{}: {} to {} ({})", p.label, p.start, p.end, p.name);
    }
    Ok(())
}
