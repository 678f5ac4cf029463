//! The immutable configuration snapshot the resolution chain reads.

use serde::Serialize;

use crate::anchor::{BaseSchedule, PatternTimeline};
use crate::records::{NamedPeriod, PatternChange, SpecialDate};
use crate::vacation::VacationRule;

/// Everything needed to answer "who has the child on this date".
///
/// Built once by the caller (usually from stored configuration) and then only
/// read; it holds no interior mutability, so a shared reference can be used
/// from several threads at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustodySchedule {
    pub base: BaseSchedule,
    pub timeline: PatternTimeline,
    pub special_dates: Vec<SpecialDate>,
    /// Named periods, both parent-assigned and no-custody. Within each kind
    /// the first period containing a date wins.
    pub periods: Vec<NamedPeriod>,
    pub vacation: Option<VacationRule>,
}

impl CustodySchedule {
    /// A schedule with only the base pattern and no overrides.
    pub fn new(base: BaseSchedule) -> Self {
        Self {
            base,
            timeline: PatternTimeline::default(),
            special_dates: Vec::new(),
            periods: Vec::new(),
            vacation: None,
        }
    }

    pub fn with_vacation(mut self, rule: VacationRule) -> Self {
        self.vacation = Some(rule);
        self
    }

    pub fn with_change(mut self, change: PatternChange) -> Self {
        self.timeline.insert(change);
        self
    }

    pub fn with_special_date(mut self, special: SpecialDate) -> Self {
        self.special_dates.push(special);
        self
    }

    pub fn with_period(mut self, period: NamedPeriod) -> Self {
        self.periods.push(period);
        self
    }
}
