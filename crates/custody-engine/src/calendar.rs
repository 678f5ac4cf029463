//! Calendar-date helpers shared by the pattern, anchor and vacation code.
//!
//! Everything here works on [`NaiveDate`]: custody is a property of a
//! calendar day, not of an instant, so no timezone ever enters the picture.
//! Helpers saturate at the edges of chrono's representable range instead of
//! panicking, which keeps every caller total.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Floor modulo: the result is in `0..n` for positive `n`, including for
/// negative `a` (dates before an anchor).
pub fn floor_mod(a: i64, n: i64) -> i64 {
    a.rem_euclid(n)
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Number of days in the inclusive range `[start, end]` (zero when `end < start`).
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (days_between(start, end) + 1).max(0)
}

/// The most recent `weekday` on or before `date`.
pub fn previous_or_same(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let back = floor_mod(
        i64::from(date.weekday().num_days_from_monday())
            - i64::from(weekday.num_days_from_monday()),
        7,
    );
    date.checked_sub_days(Days::new(back as u64)).unwrap_or(date)
}

/// The first `weekday` on or after `date`.
pub fn next_or_same(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = floor_mod(
        i64::from(weekday.num_days_from_monday())
            - i64::from(date.weekday().num_days_from_monday()),
        7,
    );
    date.checked_add_days(Days::new(ahead as u64)).unwrap_or(date)
}

/// The first occurrence of `weekday` on or after January 1 of `year`.
pub fn first_weekday_of_year(year: i32, weekday: Weekday) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(|jan1| next_or_same(jan1, weekday))
}

/// Parse the 1 (Monday) ..= 7 (Sunday) numbering used by stored configuration.
pub fn weekday_from_number(n: i64) -> Option<Weekday> {
    match n {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

/// The 1 (Monday) ..= 7 (Sunday) number of `weekday`.
pub fn weekday_number(weekday: Weekday) -> u8 {
    weekday.number_from_monday() as u8
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Every date in `[start, end]`, in order. Empty when `end < start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start).filter(|s| *s <= end), move |d| {
        d.succ_opt().filter(|next| *next <= end)
    })
}

/// The last day of `month` in `year`.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}
