//! Per-custodian day counts over a date range.
//!
//! Counts are raw integers. Turning them into percentages (and rounding
//! them for display) is left to the caller.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::custodian::CustodianSlot;
use crate::resolver::{resolve_range, ResolutionSource};
use crate::schedule::CustodySchedule;

/// Label used in the no-custody breakdown for periods without a label.
pub const UNLABELLED: &str = "Unlabelled";

/// Tally of [`resolve`](crate::resolver::resolve) results over `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustodyStats {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Number of dates resolved. Zero when `end < start`.
    pub total_days: u32,
    /// Days per custodian; every slot is present, possibly with zero.
    pub by_custodian: BTreeMap<CustodianSlot, u32>,
    /// Days per resolution step; every source is present, possibly with zero.
    pub by_source: BTreeMap<ResolutionSource, u32>,
    /// No-custody days grouped by the label of the period that caused them.
    pub no_custody_labels: BTreeMap<String, u32>,
    /// Pattern changes taking effect inside the range.
    pub pattern_changes_in_range: usize,
}

impl CustodyStats {
    fn empty(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            total_days: 0,
            by_custodian: CustodianSlot::ALL.iter().map(|s| (*s, 0)).collect(),
            by_source: ResolutionSource::ALL.iter().map(|s| (*s, 0)).collect(),
            no_custody_labels: BTreeMap::new(),
            pattern_changes_in_range: 0,
        }
    }

    /// Days assigned to `slot`.
    pub fn count(&self, slot: CustodianSlot) -> u32 {
        self.by_custodian.get(&slot).copied().unwrap_or(0)
    }

    /// Days decided by `source`.
    pub fn source_count(&self, source: ResolutionSource) -> u32 {
        self.by_source.get(&source).copied().unwrap_or(0)
    }

    /// Absolute difference in days between the two parents.
    pub fn parent_difference(&self) -> u32 {
        self.count(CustodianSlot::Parent1)
            .abs_diff(self.count(CustodianSlot::Parent2))
    }
}

/// Resolve every date in `[start, end]` and tally the results.
pub fn aggregate(schedule: &CustodySchedule, start: NaiveDate, end: NaiveDate) -> CustodyStats {
    let mut stats = CustodyStats::empty(start, end);

    for (_, resolution) in resolve_range(schedule, start, end) {
        stats.total_days += 1;
        *stats.by_custodian.entry(resolution.custodian).or_insert(0) += 1;
        *stats.by_source.entry(resolution.source).or_insert(0) += 1;
        if resolution.custodian.is_none() {
            let label = if resolution.label.is_empty() {
                UNLABELLED
            } else {
                resolution.label
            };
            *stats.no_custody_labels.entry(label.to_string()).or_insert(0) += 1;
        }
    }
    stats.pattern_changes_in_range = schedule.timeline.count_between(start, end);

    debug!(
        %start,
        %end,
        total = stats.total_days,
        parent1 = stats.count(CustodianSlot::Parent1),
        parent2 = stats.count(CustodianSlot::Parent2),
        none = stats.count(CustodianSlot::None),
        "aggregated custody"
    );
    stats
}
