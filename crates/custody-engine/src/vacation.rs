//! Automatic division of a recurring vacation window between the parents.
//!
//! A [`VacationRule`] names a window that recurs every year (the summer
//! break, by default July 1 – August 31), a [`DivisionScheme`] for splitting
//! it, and a [`YearParityRule`] deciding which parent starts in a given year.
//! [`divide`] is the underlying pure function over an explicit date range.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{days_between, inclusive_day_count};
use crate::custodian::Parent;
use crate::error::{CustodyError, Result};

/// How a vacation range is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionScheme {
    /// First half to the starting parent, second half to the other.
    #[default]
    Half,
    /// The whole range to the starting parent.
    Full,
    /// Consecutive 7-day blocks counted from the first day of the range.
    AlternateSevenDayBlocks,
    /// Calendar weeks (Monday–Sunday); a partial first week belongs to the starter.
    AlternateNaturalWeeks,
    /// Half-months: days 1–15 and 16–end of each month alternate.
    Biweekly,
}

/// Which years the configured first custodian actually starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearParityRule {
    /// The first custodian starts in even years, the other parent in odd years.
    Even,
    /// The first custodian starts in odd years, the other parent in even years.
    Odd,
    /// The first custodian starts every year.
    #[default]
    Always,
}

impl YearParityRule {
    pub fn applies(self, year: i32) -> bool {
        match self {
            YearParityRule::Even => year.rem_euclid(2) == 0,
            YearParityRule::Odd => year.rem_euclid(2) == 1,
            YearParityRule::Always => true,
        }
    }

    /// The parent who starts in `year`.
    pub fn effective_first(self, first: Parent, year: i32) -> Parent {
        if self.applies(year) {
            first
        } else {
            first.toggle()
        }
    }
}

/// Split `range` between the parents and return who has `date`.
///
/// Returns `None` when `date` lies outside `range`.
pub fn divide(
    date: NaiveDate,
    range: &RangeInclusive<NaiveDate>,
    division: DivisionScheme,
    first: Parent,
    rule: YearParityRule,
    year: i32,
) -> Option<Parent> {
    if !range.contains(&date) {
        return None;
    }
    let start = *range.start();
    let first = rule.effective_first(first, year);
    let days_in = days_between(start, date);

    let starter_has_it = match division {
        DivisionScheme::Half => {
            let len = inclusive_day_count(start, *range.end());
            let half = (len + 1) / 2;
            days_in < half
        }
        DivisionScheme::Full => true,
        DivisionScheme::AlternateSevenDayBlocks => (days_in / 7) % 2 == 0,
        DivisionScheme::AlternateNaturalWeeks => {
            let days_to_first_sunday = 7 - i64::from(start.weekday().number_from_monday());
            if days_in <= days_to_first_sunday {
                true
            } else {
                // The first full week goes to the other parent.
                let week = (days_in - days_to_first_sunday - 1) / 7;
                week % 2 != 0
            }
        }
        DivisionScheme::Biweekly => half_month_slot(start, date) % 2 == 0,
    };

    Some(if starter_has_it { first } else { first.toggle() })
}

/// Chronological half-month index of `date`, counted from the month `start` is in.
fn half_month_slot(start: NaiveDate, date: NaiveDate) -> i64 {
    let month_index = |d: NaiveDate| i64::from(d.year()) * 12 + i64::from(d.month0());
    let months = month_index(date) - month_index(start);
    months * 2 + i64::from(date.day() > 15)
}

/// A month/day window that recurs every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VacationWindow {
    start_month: u32,
    start_day: u32,
    end_month: u32,
    end_day: u32,
}

impl VacationWindow {
    /// July 1 – August 31.
    pub const SUMMER: VacationWindow = VacationWindow {
        start_month: 7,
        start_day: 1,
        end_month: 8,
        end_day: 31,
    };

    /// Build a window inside a single calendar year.
    pub fn new(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> Result<Self> {
        // Leap year, so February 29 is accepted.
        let probe = |m, d| NaiveDate::from_ymd_opt(2000, m, d);
        let (Some(start), Some(end)) = (probe(start_month, start_day), probe(end_month, end_day))
        else {
            return Err(CustodyError::InvalidWindow(format!(
                "{start_month:02}-{start_day:02}..{end_month:02}-{end_day:02} \
                 is not a valid month/day pair"
            )));
        };
        if end < start {
            return Err(CustodyError::InvalidWindow(format!(
                "end {end_month:02}-{end_day:02} is before start {start_month:02}-{start_day:02}"
            )));
        }
        Ok(Self {
            start_month,
            start_day,
            end_month,
            end_day,
        })
    }

    /// `(month, day)` of the first day.
    pub fn start(&self) -> (u32, u32) {
        (self.start_month, self.start_day)
    }

    /// `(month, day)` of the last day.
    pub fn end(&self) -> (u32, u32) {
        (self.end_month, self.end_day)
    }

    /// The concrete dates of this window in `year`. `None` if an endpoint
    /// does not exist that year (February 29 outside leap years).
    pub fn range_for_year(&self, year: i32) -> Option<RangeInclusive<NaiveDate>> {
        let start = NaiveDate::from_ymd_opt(year, self.start_month, self.start_day)?;
        let end = NaiveDate::from_ymd_opt(year, self.end_month, self.end_day)?;
        Some(start..=end)
    }
}

impl Default for VacationWindow {
    fn default() -> Self {
        Self::SUMMER
    }
}

/// Automatic custody inside a recurring vacation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VacationRule {
    pub window: VacationWindow,
    pub division: DivisionScheme,
    pub first_custodian: Parent,
    pub year_parity: YearParityRule,
}

impl VacationRule {
    /// A summer (July–August) rule.
    pub fn summer(
        division: DivisionScheme,
        first_custodian: Parent,
        year_parity: YearParityRule,
    ) -> Self {
        Self {
            window: VacationWindow::SUMMER,
            division,
            first_custodian,
            year_parity,
        }
    }

    /// A summer rule from "who starts in even years" / "who starts in odd years".
    pub fn from_year_starters(
        division: DivisionScheme,
        even_year: Parent,
        odd_year: Parent,
    ) -> Self {
        let year_parity = if even_year == odd_year {
            YearParityRule::Always
        } else {
            YearParityRule::Even
        };
        Self::summer(division, even_year, year_parity)
    }

    /// Who has `date` under this rule, or `None` if `date` is outside the
    /// window of its own year.
    pub fn custodian_for(&self, date: NaiveDate) -> Option<Parent> {
        let year = date.year();
        let range = self.window.range_for_year(year)?;
        divide(
            date,
            &range,
            self.division,
            self.first_custodian,
            self.year_parity,
            year,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::days_inclusive;

    const P1: Parent = Parent::Parent1;
    const P2: Parent = Parent::Parent2;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn summer(year: i32) -> RangeInclusive<NaiveDate> {
        date(year, 7, 1)..=date(year, 8, 31)
    }

    fn split(range: &RangeInclusive<NaiveDate>, division: DivisionScheme) -> Vec<Parent> {
        days_inclusive(*range.start(), *range.end())
            .map(|d| divide(d, range, division, P1, YearParityRule::Always, d.year()).unwrap())
            .collect()
    }

    // ── Year parity ─────────────────────────────────────────────────────

    #[test]
    fn test_year_parity_applies() {
        assert!(YearParityRule::Even.applies(2024));
        assert!(!YearParityRule::Even.applies(2025));
        assert!(YearParityRule::Odd.applies(2025));
        assert!(YearParityRule::Odd.applies(-1));
        assert!(YearParityRule::Always.applies(2025));
    }

    #[test]
    fn test_even_rule_in_odd_year_toggles_starter() {
        assert_eq!(YearParityRule::Even.effective_first(P1, 2025), P2);
        let range = summer(2025);
        let got = divide(date(2025, 7, 1), &range, DivisionScheme::Full, P1, YearParityRule::Even, 2025);
        assert_eq!(got, Some(P2));
    }

    // ── Half ────────────────────────────────────────────────────────────

    #[test]
    fn test_half_summer_2024() {
        let range = summer(2024);
        let parents = split(&range, DivisionScheme::Half);
        assert_eq!(parents.len(), 62);
        assert!(parents[..31].iter().all(|p| *p == P1));
        assert!(parents[31..].iter().all(|p| *p == P2));
    }

    #[test]
    fn test_half_odd_length_gives_starter_the_extra_day() {
        let range = date(2024, 12, 23)..=date(2024, 12, 29); // 7 days
        let parents = split(&range, DivisionScheme::Half);
        assert_eq!(parents, vec![P1, P1, P1, P1, P2, P2, P2]);
    }

    // ── Full ────────────────────────────────────────────────────────────

    #[test]
    fn test_full() {
        let range = summer(2024);
        assert!(split(&range, DivisionScheme::Full).iter().all(|p| *p == P1));
    }

    // ── Seven-day blocks ────────────────────────────────────────────────

    #[test]
    fn test_seven_day_blocks() {
        let range = summer(2024);
        let parents = split(&range, DivisionScheme::AlternateSevenDayBlocks);
        assert!(parents[0..7].iter().all(|p| *p == P1));
        assert!(parents[7..14].iter().all(|p| *p == P2));
        assert!(parents[14..21].iter().all(|p| *p == P1));
        assert_eq!(parents[61], P1); // day 61 → block 8
    }

    // ── Natural weeks ───────────────────────────────────────────────────

    #[test]
    fn test_natural_weeks_partial_first_week() {
        // 2025-07-01 is a Tuesday: Jul 1–6 is the partial first week.
        let range = summer(2025);
        let parents = split(&range, DivisionScheme::AlternateNaturalWeeks);
        assert!(parents[0..6].iter().all(|p| *p == P1));
        // Mon Jul 7 – Sun Jul 13: first full week → other parent.
        assert!(parents[6..13].iter().all(|p| *p == P2));
        // Mon Jul 14 – Sun Jul 20 → back to the starter.
        assert!(parents[13..20].iter().all(|p| *p == P1));
    }

    #[test]
    fn test_natural_weeks_range_starting_monday() {
        // 2024-07-01 is a Monday: days_to_first_sunday = 6, so the whole first
        // week counts as the "partial" week and belongs to the starter.
        let range = summer(2024);
        let parents = split(&range, DivisionScheme::AlternateNaturalWeeks);
        assert!(parents[0..7].iter().all(|p| *p == P1));
        assert!(parents[7..14].iter().all(|p| *p == P2));
        assert!(parents[14..21].iter().all(|p| *p == P1));
    }

    #[test]
    fn test_natural_weeks_range_starting_sunday() {
        // 2029-07-01 is a Sunday: the partial week is that single day.
        let range = summer(2029);
        let parents = split(&range, DivisionScheme::AlternateNaturalWeeks);
        assert_eq!(parents[0], P1);
        assert!(parents[1..8].iter().all(|p| *p == P2));
        assert!(parents[8..15].iter().all(|p| *p == P1));
    }

    // ── Biweekly ────────────────────────────────────────────────────────

    #[test]
    fn test_biweekly_summer() {
        let range = summer(2024);
        let at = |m, d| divide(date(2024, m, d), &range, DivisionScheme::Biweekly, P1, YearParityRule::Always, 2024);
        assert_eq!(at(7, 1), Some(P1));
        assert_eq!(at(7, 15), Some(P1));
        assert_eq!(at(7, 16), Some(P2));
        assert_eq!(at(7, 31), Some(P2));
        assert_eq!(at(8, 1), Some(P1));
        assert_eq!(at(8, 15), Some(P1));
        assert_eq!(at(8, 16), Some(P2));
        assert_eq!(at(8, 31), Some(P2));
    }

    // ── Range handling ──────────────────────────────────────────────────

    #[test]
    fn test_divide_outside_range_is_none() {
        let range = summer(2024);
        for d in [date(2024, 6, 30), date(2024, 9, 1)] {
            assert_eq!(divide(d, &range, DivisionScheme::Half, P1, YearParityRule::Always, 2024), None);
        }
    }

    // ── Window & rule ───────────────────────────────────────────────────

    #[test]
    fn test_window_validation() {
        assert!(VacationWindow::new(7, 1, 8, 31).is_ok());
        assert!(VacationWindow::new(2, 29, 3, 1).is_ok());
        assert!(matches!(VacationWindow::new(8, 31, 7, 1), Err(CustodyError::InvalidWindow(_))));
        assert!(matches!(VacationWindow::new(6, 31, 7, 1), Err(CustodyError::InvalidWindow(_))));
        assert!(matches!(VacationWindow::new(13, 1, 13, 2), Err(CustodyError::InvalidWindow(_))));
    }

    #[test]
    fn test_window_feb_29_outside_leap_year() {
        let w = VacationWindow::new(2, 29, 3, 5).unwrap();
        assert!(w.range_for_year(2024).is_some());
        assert!(w.range_for_year(2023).is_none());
    }

    #[test]
    fn test_rule_from_year_starters() {
        let rule = VacationRule::from_year_starters(DivisionScheme::Full, P1, P2);
        assert_eq!(rule.year_parity, YearParityRule::Even);
        assert_eq!(rule.custodian_for(date(2024, 7, 10)), Some(P1));
        assert_eq!(rule.custodian_for(date(2025, 7, 10)), Some(P2));

        let rule = VacationRule::from_year_starters(DivisionScheme::Full, P2, P2);
        assert_eq!(rule.year_parity, YearParityRule::Always);
        assert_eq!(rule.custodian_for(date(2024, 7, 10)), Some(P2));
        assert_eq!(rule.custodian_for(date(2025, 7, 10)), Some(P2));
    }

    #[test]
    fn test_rule_outside_window() {
        let rule = VacationRule::summer(DivisionScheme::Half, P1, YearParityRule::Always);
        assert_eq!(rule.custodian_for(date(2024, 6, 30)), None);
        assert_eq!(rule.custodian_for(date(2024, 7, 31)), Some(P1));
        assert_eq!(rule.custodian_for(date(2024, 8, 1)), Some(P2));
    }
}
