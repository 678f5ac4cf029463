//! The priority-ordered resolution chain.
//!
//! For a single date the chain tries, in order, and stops at the first hit:
//!
//! 1. a no-custody period containing the date,
//! 2. a special date on that day,
//! 3. a parent-assigned named period containing the date,
//! 4. the automatic vacation rule, if the date is inside its window,
//! 5. the recurring pattern (base configuration or the applicable change).
//!
//! Overlapping records are not an error: the order above decides.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::trace;

use crate::anchor::pattern_parent;
use crate::calendar::days_inclusive;
use crate::custodian::CustodianSlot;
use crate::schedule::CustodySchedule;

/// Label attached to days decided by the automatic vacation rule.
pub const VACATION_LABEL: &str = "Vacation";

/// Which step of the chain produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    NoCustody,
    SpecialDate,
    NamedPeriod,
    Vacation,
    Pattern,
}

impl ResolutionSource {
    /// Every source, in chain order.
    pub const ALL: [ResolutionSource; 5] = [
        ResolutionSource::NoCustody,
        ResolutionSource::SpecialDate,
        ResolutionSource::NamedPeriod,
        ResolutionSource::Vacation,
        ResolutionSource::Pattern,
    ];
}

/// The answer for one date. Labels borrow from the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    pub custodian: CustodianSlot,
    pub label: &'a str,
    /// `false` only when the recurring pattern decided.
    pub is_exception: bool,
    pub source: ResolutionSource,
}

impl<'a> Resolution<'a> {
    fn exception(custodian: CustodianSlot, label: &'a str, source: ResolutionSource) -> Self {
        Self {
            custodian,
            label,
            is_exception: true,
            source,
        }
    }
}

/// Resolve custody for a single date.
pub fn resolve(schedule: &CustodySchedule, date: NaiveDate) -> Resolution<'_> {
    let resolution = no_custody(schedule, date)
        .or_else(|| special_date(schedule, date))
        .or_else(|| named_period(schedule, date))
        .or_else(|| vacation(schedule, date))
        .unwrap_or_else(|| Resolution {
            custodian: pattern_parent(&schedule.base, &schedule.timeline, date).into(),
            label: "",
            is_exception: false,
            source: ResolutionSource::Pattern,
        });
    trace!(%date, custodian = ?resolution.custodian, source = ?resolution.source, "resolved");
    resolution
}

/// Resolve every date in `[start, end]`, lazily and in order.
///
/// Dropping the iterator early is how a caller abandons a long traversal.
pub fn resolve_range(
    schedule: &CustodySchedule,
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = (NaiveDate, Resolution<'_>)> + '_ {
    days_inclusive(start, end).map(move |date| (date, resolve(schedule, date)))
}

fn no_custody(schedule: &CustodySchedule, date: NaiveDate) -> Option<Resolution<'_>> {
    schedule
        .periods
        .iter()
        .find(|p| p.is_no_custody() && p.contains(date))
        .map(|p| Resolution::exception(CustodianSlot::None, p.label(), ResolutionSource::NoCustody))
}

fn special_date(schedule: &CustodySchedule, date: NaiveDate) -> Option<Resolution<'_>> {
    schedule
        .special_dates
        .iter()
        .find(|s| s.date == date)
        .map(|s| Resolution::exception(s.custodian.into(), &s.label, ResolutionSource::SpecialDate))
}

fn named_period(schedule: &CustodySchedule, date: NaiveDate) -> Option<Resolution<'_>> {
    schedule
        .periods
        .iter()
        .find(|p| !p.is_no_custody() && p.contains(date))
        .map(|p| Resolution::exception(p.custodian(), p.label(), ResolutionSource::NamedPeriod))
}

fn vacation(schedule: &CustodySchedule, date: NaiveDate) -> Option<Resolution<'_>> {
    let parent = schedule.vacation.as_ref()?.custodian_for(date)?;
    Some(Resolution::exception(
        parent.into(),
        VACATION_LABEL,
        ResolutionSource::Vacation,
    ))
}
