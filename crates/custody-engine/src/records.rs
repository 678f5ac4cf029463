//! User-authored override records.
//!
//! These are validated once, at construction. The resolution chain reads
//! them and never has to re-check their invariants.

use std::ops::RangeInclusive;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::calendar::inclusive_day_count;
use crate::custodian::{CustodianSlot, Parent};
use crate::error::{CustodyError, Result};
use crate::pattern::CustodyPattern;

/// A regime change of the recurring pattern, in force from `effective_from`
/// until the next change supersedes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternChange {
    pub effective_from: NaiveDate,
    pub pattern: CustodyPattern,
    pub change_day: Weekday,
    pub starts_with: Parent,
    pub label: String,
}

impl PatternChange {
    pub fn new(
        effective_from: NaiveDate,
        pattern: CustodyPattern,
        change_day: Weekday,
        starts_with: Parent,
        label: impl Into<String>,
    ) -> Self {
        Self {
            effective_from,
            pattern,
            change_day,
            starts_with,
            label: label.into(),
        }
    }

    /// The pattern as it applies under this change, with the change's starter.
    pub fn effective_pattern(&self) -> CustodyPattern {
        self.pattern.with_starter(self.starts_with)
    }
}

/// A single-day exception assigning custody to one parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialDate {
    pub date: NaiveDate,
    pub custodian: Parent,
    pub label: String,
}

impl SpecialDate {
    pub fn new(date: NaiveDate, custodian: Parent, label: impl Into<String>) -> Self {
        Self {
            date,
            custodian,
            label: label.into(),
        }
    }
}

/// A manually configured inclusive date range.
///
/// With a parent as custodian this is a holiday or vacation block; with
/// [`CustodianSlot::None`] it is a no-custody period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedPeriod {
    start: NaiveDate,
    end: NaiveDate,
    custodian: CustodianSlot,
    label: String,
}

impl NamedPeriod {
    /// Build a period. Fails when `end` is before `start`.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        custodian: CustodianSlot,
        label: impl Into<String>,
    ) -> Result<Self> {
        if end < start {
            return Err(CustodyError::InvalidPeriod(format!(
                "end {end} is before start {start}"
            )));
        }
        Ok(Self {
            start,
            end,
            custodian,
            label: label.into(),
        })
    }

    /// A period during which neither parent has custody.
    pub fn no_custody(start: NaiveDate, end: NaiveDate, label: impl Into<String>) -> Result<Self> {
        Self::new(start, end, CustodianSlot::None, label)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn custodian(&self) -> CustodianSlot {
        self.custodian
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn range(&self) -> RangeInclusive<NaiveDate> {
        self.start..=self.end
    }

    pub fn is_no_custody(&self) -> bool {
        self.custodian.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.range().contains(&date)
    }

    /// Length in days, both ends included.
    pub fn duration_days(&self) -> i64 {
        inclusive_day_count(self.start, self.end)
    }

    /// Whether the two periods share at least one day. Resolution never uses
    /// this; it is for editors that want to warn about overlapping entries.
    pub fn overlaps(&self, other: &NamedPeriod) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
