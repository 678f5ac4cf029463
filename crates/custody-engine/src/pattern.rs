//! Recurring custody patterns.
//!
//! Each pattern is a pure function of `(date, anchor, change_day)`. None of
//! them depends on "today" or on any configured range, so they are total
//! over every representable date and give the same answer for the same
//! inputs every time.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::calendar::{days_between, floor_mod, is_weekend, previous_or_same};
use crate::custodian::Parent;
use crate::error::{CustodyError, Result};

/// An N-days-for-one, M-days-for-the-other rotation.
///
/// The starting parent always owns the first `days_for(starter)` days of
/// each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomCycle {
    days_for_parent1: u32,
    days_for_parent2: u32,
    starts_with: Parent,
}

impl CustomCycle {
    /// Build a cycle. Both day counts must be strictly positive.
    pub fn new(days_for_parent1: u32, days_for_parent2: u32, starts_with: Parent) -> Result<Self> {
        if days_for_parent1 == 0 || days_for_parent2 == 0 {
            return Err(CustodyError::InvalidCycle(format!(
                "day counts must be positive (got {days_for_parent1} and {days_for_parent2})"
            )));
        }
        Ok(Self {
            days_for_parent1,
            days_for_parent2,
            starts_with,
        })
    }

    pub fn days_for_parent1(&self) -> u32 {
        self.days_for_parent1
    }

    pub fn days_for_parent2(&self) -> u32 {
        self.days_for_parent2
    }

    pub fn starts_with(&self) -> Parent {
        self.starts_with
    }

    pub fn days_for(&self, parent: Parent) -> u32 {
        match parent {
            Parent::Parent1 => self.days_for_parent1,
            Parent::Parent2 => self.days_for_parent2,
        }
    }

    /// Total length of one rotation in days. Two `u32` halves always fit.
    pub fn cycle_length(&self) -> u64 {
        u64::from(self.days_for_parent1) + u64::from(self.days_for_parent2)
    }

    fn parent_for_date(&self, date: NaiveDate, anchor: NaiveDate) -> Parent {
        let length = i64::from(self.days_for_parent1) + i64::from(self.days_for_parent2);
        let position = floor_mod(days_between(anchor, date), length);
        if position < i64::from(self.days_for(self.starts_with)) {
            self.starts_with
        } else {
            self.starts_with.toggle()
        }
    }
}

/// The closed set of recurring patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CustodyPattern {
    /// Whole weeks alternate, switching on the change day.
    AlternateWeeks { starts_with: Parent },
    /// Single days alternate.
    AlternateDays { starts_with: Parent },
    /// One parent Monday–Friday, the other Saturday–Sunday.
    WeekdaysWeekends {
        weekday_parent: Parent,
        weekend_parent: Parent,
    },
    /// Arbitrary N/M rotation.
    CustomCycle(CustomCycle),
}

impl Default for CustodyPattern {
    fn default() -> Self {
        CustodyPattern::AlternateWeeks {
            starts_with: Parent::Parent1,
        }
    }
}

impl CustodyPattern {
    /// Shorthand for a validated [`CustomCycle`] pattern.
    pub fn custom_cycle(
        days_for_parent1: u32,
        days_for_parent2: u32,
        starts_with: Parent,
    ) -> Result<Self> {
        CustomCycle::new(days_for_parent1, days_for_parent2, starts_with)
            .map(CustodyPattern::CustomCycle)
    }

    /// Human-readable pattern name.
    pub fn name(&self) -> &'static str {
        match self {
            CustodyPattern::AlternateWeeks { .. } => "Alternate weeks",
            CustodyPattern::AlternateDays { .. } => "Alternate days",
            CustodyPattern::WeekdaysWeekends { .. } => "Weekdays / weekends",
            CustodyPattern::CustomCycle(_) => "Custom cycle",
        }
    }

    /// Replace the starting parent of the alternating patterns.
    ///
    /// Weekday/weekend splits have no starter, and custom cycles keep the
    /// starter they were configured with.
    pub fn with_starter(self, starts_with: Parent) -> Self {
        match self {
            CustodyPattern::AlternateWeeks { .. } => CustodyPattern::AlternateWeeks { starts_with },
            CustodyPattern::AlternateDays { .. } => CustodyPattern::AlternateDays { starts_with },
            other => other,
        }
    }

    /// Which parent the pattern assigns to `date`, counting from `anchor`.
    pub fn parent_for_date(
        &self,
        date: NaiveDate,
        anchor: NaiveDate,
        change_day: Weekday,
    ) -> Parent {
        match self {
            CustodyPattern::AlternateWeeks { starts_with } => {
                let aligned_anchor = previous_or_same(anchor, change_day);
                let aligned_date = previous_or_same(date, change_day);
                // Both sides sit on the same weekday, so this divides exactly.
                let weeks = days_between(aligned_anchor, aligned_date) / 7;
                alternate(*starts_with, weeks)
            }
            CustodyPattern::AlternateDays { starts_with } => {
                alternate(*starts_with, days_between(anchor, date))
            }
            CustodyPattern::WeekdaysWeekends {
                weekday_parent,
                weekend_parent,
            } => {
                if is_weekend(date) {
                    *weekend_parent
                } else {
                    *weekday_parent
                }
            }
            CustodyPattern::CustomCycle(cycle) => cycle.parent_for_date(date, anchor),
        }
    }
}

fn alternate(starts_with: Parent, offset: i64) -> Parent {
    if floor_mod(offset, 2) == 0 {
        starts_with
    } else {
        starts_with.toggle()
    }
}
