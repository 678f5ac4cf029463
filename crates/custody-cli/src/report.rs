//! Text and JSON rendering shared by the commands.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use custody_engine::{CustodianSlot, LoadedConfig, Resolution, ResolutionSource};
use serde::Serialize;

/// One resolved day, as printed.
#[derive(Debug, Serialize)]
pub struct DayLine<'a> {
    pub date: NaiveDate,
    pub weekday: String,
    pub custodian: CustodianSlot,
    pub name: &'a str,
    pub label: &'a str,
    pub is_exception: bool,
    pub source: ResolutionSource,
}

impl<'a> DayLine<'a> {
    pub fn new(config: &'a LoadedConfig, date: NaiveDate, resolution: Resolution<'a>) -> Self {
        Self {
            date,
            weekday: date.weekday().to_string(),
            custodian: resolution.custodian,
            name: config.name_of(resolution.custodian),
            label: resolution.label,
            is_exception: resolution.is_exception,
            source: resolution.source,
        }
    }

    /// `2024-01-10 Wed  Sam * (Birthday)`; `*` marks exceptions.
    pub fn to_text(&self) -> String {
        let mut line = format!("{} {}  {}", self.date, self.weekday, self.name);
        if self.is_exception {
            line.push_str(" *");
        }
        if !self.label.is_empty() {
            line.push_str(&format!(" ({})", self.label));
        }
        line
    }
}

/// `count` as a percentage of `total`, rounded to one decimal.
pub fn percent(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(count) * 1000.0 / f64::from(total)).round() / 10.0
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}
