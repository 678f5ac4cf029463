//! Base-pattern resolution: anchor alignment and the override timeline.
//!
//! The base pattern is configured with a start date, a weekly change day and
//! an [`ApplicationMode`]. Pattern changes recorded later supersede the base
//! configuration from their effective date onward.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calendar::{first_weekday_of_year, previous_or_same};
use crate::custodian::Parent;
use crate::pattern::CustodyPattern;
use crate::records::PatternChange;

/// How the configured start date relates to dates before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationMode {
    /// Anchor once at the configured start and run forever. Queries in years
    /// before the configured year are re-anchored to the first change day of
    /// their own year.
    #[default]
    Forward,
    /// Anchor at the configured start for dates on or after it; dates before
    /// it are re-anchored to the first change day of their own year.
    FromDate,
}

/// The base recurring configuration, used when no pattern change applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseSchedule {
    pub pattern: CustodyPattern,
    pub start_date: NaiveDate,
    pub change_day: Weekday,
    pub starts_with: Parent,
    pub mode: ApplicationMode,
}

impl BaseSchedule {
    /// Alternate weeks from `start_date`, changing on Mondays, Parent 1 first.
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            pattern: CustodyPattern::default(),
            start_date,
            change_day: Weekday::Mon,
            starts_with: Parent::Parent1,
            mode: ApplicationMode::Forward,
        }
    }

    /// The anchor the base pattern counts from when answering for `date`.
    ///
    /// In [`ApplicationMode::Forward`] the phase for years before the
    /// configured year differs from the phase the configured anchor would
    /// give; existing calendars depend on it, so it is kept as is.
    pub fn anchor_for(&self, date: NaiveDate) -> NaiveDate {
        let change_day_in_week = previous_or_same(self.start_date, self.change_day);
        let use_configured = match self.mode {
            ApplicationMode::Forward => date.year() >= self.start_date.year(),
            ApplicationMode::FromDate => date >= change_day_in_week,
        };
        if use_configured {
            change_day_in_week
        } else {
            first_weekday_of_year(date.year(), self.change_day).unwrap_or(change_day_in_week)
        }
    }

    /// The pattern with the configured starter applied.
    pub fn effective_pattern(&self) -> CustodyPattern {
        self.pattern.with_starter(self.starts_with)
    }

    pub fn parent_for_date(&self, date: NaiveDate) -> Parent {
        let anchor = self.anchor_for(date);
        self.effective_pattern()
            .parent_for_date(date, anchor, self.change_day)
    }
}

/// Pattern changes ordered by effective date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PatternTimeline {
    changes: Vec<PatternChange>,
}

impl PatternTimeline {
    pub fn new(mut changes: Vec<PatternChange>) -> Self {
        changes.sort_by_key(|c| c.effective_from);
        Self { changes }
    }

    /// Add a change, keeping the timeline sorted. A change sharing an
    /// effective date with an existing one goes after it.
    pub fn insert(&mut self, change: PatternChange) {
        let at = self
            .changes
            .partition_point(|c| c.effective_from <= change.effective_from);
        self.changes.insert(at, change);
    }

    pub fn changes(&self) -> &[PatternChange] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// The change in force on `date`: greatest effective date not after it.
    /// When several changes share that date the earliest recorded one wins.
    pub fn applicable(&self, date: NaiveDate) -> Option<&PatternChange> {
        let end = self.changes.partition_point(|c| c.effective_from <= date);
        let latest = self.changes.get(end.checked_sub(1)?)?.effective_from;
        let first = self.changes.partition_point(|c| c.effective_from < latest);
        self.changes.get(first)
    }

    /// Number of changes taking effect within `[start, end]`.
    pub fn count_between(&self, start: NaiveDate, end: NaiveDate) -> usize {
        if end < start {
            return 0;
        }
        let lo = self.changes.partition_point(|c| c.effective_from < start);
        let hi = self.changes.partition_point(|c| c.effective_from <= end);
        hi - lo
    }
}

/// The recurring-pattern answer for `date`: the applicable change if there
/// is one, else the base configuration.
pub fn pattern_parent(
    base: &BaseSchedule,
    timeline: &PatternTimeline,
    date: NaiveDate,
) -> Parent {
    match timeline.applicable(date) {
        Some(change) => {
            trace!(
                %date,
                effective_from = %change.effective_from,
                label = %change.label,
                "pattern change applies"
            );
            change
                .effective_pattern()
                .parent_for_date(date, change.effective_from, change.change_day)
        }
        None => base.parent_for_date(date),
    }
}
