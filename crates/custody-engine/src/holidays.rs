//! Suggested holiday periods.
//!
//! These helpers only produce [`NamedPeriod`] records. Once added to a
//! schedule they are ordinary named periods; the resolution chain has no
//! notion of holidays.

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};

use crate::custodian::Parent;
use crate::records::NamedPeriod;
use crate::vacation::YearParityRule;

/// Western (Gregorian) Easter Sunday for `year`.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    // Anonymous Gregorian computus (Meeus/Jones/Butcher).
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

/// Holy week: the Monday before Easter through Easter Sunday.
pub fn holy_week(year: i32) -> Option<RangeInclusive<NaiveDate>> {
    let easter = easter_sunday(year)?;
    let start = easter.checked_sub_days(Days::new(6))?;
    Some(start..=easter)
}

/// The usual two-part Christmas split: December 23–30, then December 31
/// through January 8 of the following year.
pub fn christmas_halves(year: i32) -> Option<[RangeInclusive<NaiveDate>; 2]> {
    let next_year = year.checked_add(1)?;
    let first = NaiveDate::from_ymd_opt(year, 12, 23)?..=NaiveDate::from_ymd_opt(year, 12, 30)?;
    let second =
        NaiveDate::from_ymd_opt(year, 12, 31)?..=NaiveDate::from_ymd_opt(next_year, 1, 8)?;
    Some([first, second])
}

/// Holy week of `year` assigned to whoever starts that year under `rule`.
pub fn named_holy_week(year: i32, first: Parent, rule: YearParityRule) -> Option<NamedPeriod> {
    let range = holy_week(year)?;
    let parent = rule.effective_first(first, year);
    NamedPeriod::new(*range.start(), *range.end(), parent.into(), "Holy week").ok()
}

/// Both Christmas halves of `year`: the first to whoever starts that year
/// under `rule`, the second to the other parent.
pub fn named_christmas_halves(
    year: i32,
    first: Parent,
    rule: YearParityRule,
) -> Option<[NamedPeriod; 2]> {
    let [a, b] = christmas_halves(year)?;
    let parent = rule.effective_first(first, year);
    Some([
        NamedPeriod::new(*a.start(), *a.end(), parent.into(), "Christmas (first half)").ok()?,
        NamedPeriod::new(*b.start(), *b.end(), parent.toggle().into(), "Christmas (second half)")
            .ok()?,
    ])
}
