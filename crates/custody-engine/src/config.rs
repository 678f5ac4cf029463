//! Stored configuration snapshots.
//!
//! The persisted document uses primitive values (ISO date strings, parent
//! numbers 1/2, weekday numbers 1–7, snake-case names) and is not trusted.
//! [`load_config`] turns it into a [`CustodySchedule`], substituting a safe
//! default for every value out of range and skipping records that cannot be
//! repaired. Each substitution is logged at `warn`. The engine itself never
//! sees malformed values.
//!
//! [`save_config`] writes the same document shape back.

use chrono::{NaiveDate, Weekday};
use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::anchor::{ApplicationMode, BaseSchedule, PatternTimeline};
use crate::calendar::{weekday_from_number, weekday_number};
use crate::custodian::{CustodianSlot, Parent};
use crate::error::{CustodyError, Result};
use crate::pattern::CustodyPattern;
use crate::records::{NamedPeriod, PatternChange, SpecialDate};
use crate::schedule::CustodySchedule;
use crate::vacation::{DivisionScheme, VacationRule, VacationWindow};

/// Cycle length substituted for non-positive custom cycle lengths.
pub const DEFAULT_CYCLE_DAYS: u32 = 7;

const DATE_FORMAT: &str = "%Y-%m-%d";

// ── Persisted document ──────────────────────────────────────────────────

/// The persisted configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredConfig {
    pub parent1_name: String,
    pub parent2_name: String,
    pub start_date: String,
    pub pattern: StoredPattern,
    pub starts_with: i64,
    pub change_day: i64,
    pub mode: String,
    pub summer: StoredSummer,
    pub pattern_changes: Vec<StoredPatternChange>,
    pub special_dates: Vec<StoredSpecialDate>,
    pub periods: Vec<StoredPeriod>,
}

impl Default for StoredConfig {
    fn default() -> Self {
        Self {
            parent1_name: "Parent 1".to_string(),
            parent2_name: "Parent 2".to_string(),
            start_date: String::new(),
            pattern: StoredPattern::default(),
            starts_with: 1,
            change_day: 1,
            mode: "forward".to_string(),
            summer: StoredSummer::default(),
            pattern_changes: Vec::new(),
            special_dates: Vec::new(),
            periods: Vec::new(),
        }
    }
}

/// A pattern as stored. Which fields matter depends on `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredPattern {
    /// `alternate_weeks`, `alternate_days`, `weekdays_weekends` or `custom_cycle`.
    pub kind: String,
    pub weekday_parent: i64,
    pub weekend_parent: i64,
    pub days_parent1: i64,
    pub days_parent2: i64,
}

impl Default for StoredPattern {
    fn default() -> Self {
        Self {
            kind: "alternate_weeks".to_string(),
            weekday_parent: 1,
            weekend_parent: 2,
            days_parent1: i64::from(DEFAULT_CYCLE_DAYS),
            days_parent2: i64::from(DEFAULT_CYCLE_DAYS),
        }
    }
}

/// The summer vacation rule as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredSummer {
    pub enabled: bool,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
    pub division: String,
    pub even_year_starts_with: i64,
    pub odd_year_starts_with: i64,
}

impl Default for StoredSummer {
    fn default() -> Self {
        let (start_month, start_day) = VacationWindow::SUMMER.start();
        let (end_month, end_day) = VacationWindow::SUMMER.end();
        Self {
            enabled: true,
            start_month,
            start_day,
            end_month,
            end_day,
            division: "half".to_string(),
            even_year_starts_with: 1,
            odd_year_starts_with: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredPatternChange {
    pub effective_from: String,
    pub pattern: StoredPattern,
    pub starts_with: i64,
    pub change_day: i64,
    pub label: String,
}

impl Default for StoredPatternChange {
    fn default() -> Self {
        Self {
            effective_from: String::new(),
            pattern: StoredPattern::default(),
            starts_with: 1,
            change_day: 1,
            label: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredSpecialDate {
    pub date: String,
    pub parent: i64,
    pub label: String,
}

/// A named period as stored. `parent` 0 marks a no-custody period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredPeriod {
    pub start: String,
    pub end: String,
    pub parent: i64,
    pub label: String,
}

// ── Loaded configuration ────────────────────────────────────────────────

/// A validated schedule plus the display names of both parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub schedule: CustodySchedule,
    pub parent1_name: String,
    pub parent2_name: String,
}

impl LoadedConfig {
    /// Display name for `slot`.
    pub fn name_of(&self, slot: CustodianSlot) -> &str {
        match slot {
            CustodianSlot::Parent1 => &self.parent1_name,
            CustodianSlot::Parent2 => &self.parent2_name,
            CustodianSlot::None => "No custody",
        }
    }
}

/// Parse a stored document and convert it with safe defaults.
///
/// `fallback_date` replaces an unparsable base start date; pass the caller's
/// notion of today. Only a document that is not JSON, or has the wrong
/// shape, is an error.
pub fn load_config(json: &str, fallback_date: NaiveDate) -> Result<LoadedConfig> {
    let stored: StoredConfig =
        serde_json::from_str(json).map_err(|e| CustodyError::InvalidConfig(e.to_string()))?;
    Ok(stored.into_loaded(fallback_date))
}

/// Serialize `config` as a pretty-printed stored document.
pub fn save_config(config: &LoadedConfig) -> Result<String> {
    serde_json::to_string_pretty(&StoredConfig::from(config))
        .map_err(|e| CustodyError::InvalidConfig(e.to_string()))
}

impl StoredConfig {
    /// Convert to a schedule, substituting defaults and skipping bad records.
    pub fn into_loaded(self, fallback_date: NaiveDate) -> LoadedConfig {
        let start_date = if self.start_date.trim().is_empty() {
            debug!(%fallback_date, "no start date stored, using fallback");
            fallback_date
        } else {
            parse_date(&self.start_date).unwrap_or_else(|| {
                warn!(
                    value = %self.start_date,
                    %fallback_date,
                    "unparsable start date, using fallback"
                );
                fallback_date
            })
        };
        let starts_with = parent_or_default(self.starts_with, "starts_with");
        let base = BaseSchedule {
            pattern: self.pattern.to_pattern(starts_with),
            start_date,
            change_day: weekday_or_default(self.change_day, "change_day"),
            starts_with,
            mode: name_or_default::<ApplicationMode>(&self.mode, "mode"),
        };

        let changes = self
            .pattern_changes
            .into_iter()
            .filter_map(StoredPatternChange::into_change)
            .collect();

        let mut schedule = CustodySchedule::new(base);
        schedule.timeline = PatternTimeline::new(changes);
        schedule.vacation = self.summer.to_rule();
        schedule.special_dates = self
            .special_dates
            .into_iter()
            .filter_map(StoredSpecialDate::into_special_date)
            .collect();
        schedule.periods = self
            .periods
            .into_iter()
            .filter_map(StoredPeriod::into_period)
            .collect();

        debug!(
            changes = schedule.timeline.len(),
            special_dates = schedule.special_dates.len(),
            periods = schedule.periods.len(),
            "loaded configuration"
        );

        LoadedConfig {
            schedule,
            parent1_name: name_or(self.parent1_name, "Parent 1"),
            parent2_name: name_or(self.parent2_name, "Parent 2"),
        }
    }
}

impl StoredPattern {
    fn to_pattern(&self, starts_with: Parent) -> CustodyPattern {
        match self.kind.as_str() {
            "alternate_weeks" => CustodyPattern::AlternateWeeks { starts_with },
            "alternate_days" => CustodyPattern::AlternateDays { starts_with },
            "weekdays_weekends" => CustodyPattern::WeekdaysWeekends {
                weekday_parent: parent_or_default(self.weekday_parent, "weekday_parent"),
                weekend_parent: parent_or_default(self.weekend_parent, "weekend_parent"),
            },
            "custom_cycle" => {
                let p1 = cycle_days_or_default(self.days_parent1, "days_parent1");
                let p2 = cycle_days_or_default(self.days_parent2, "days_parent2");
                CustodyPattern::custom_cycle(p1, p2, starts_with)
                    .unwrap_or(CustodyPattern::AlternateWeeks { starts_with })
            }
            other => {
                warn!(kind = other, "unknown pattern kind, using alternate weeks");
                CustodyPattern::AlternateWeeks { starts_with }
            }
        }
    }

    fn from_pattern(pattern: &CustodyPattern) -> Self {
        let defaults = Self::default();
        match pattern {
            CustodyPattern::AlternateWeeks { .. } => defaults,
            CustodyPattern::AlternateDays { .. } => Self {
                kind: "alternate_days".to_string(),
                ..defaults
            },
            CustodyPattern::WeekdaysWeekends {
                weekday_parent,
                weekend_parent,
            } => Self {
                kind: "weekdays_weekends".to_string(),
                weekday_parent: i64::from(weekday_parent.number()),
                weekend_parent: i64::from(weekend_parent.number()),
                ..defaults
            },
            CustodyPattern::CustomCycle(cycle) => Self {
                kind: "custom_cycle".to_string(),
                days_parent1: i64::from(cycle.days_for_parent1()),
                days_parent2: i64::from(cycle.days_for_parent2()),
                ..defaults
            },
        }
    }
}

impl StoredSummer {
    fn to_rule(&self) -> Option<VacationRule> {
        if !self.enabled {
            return None;
        }
        let window =
            VacationWindow::new(self.start_month, self.start_day, self.end_month, self.end_day)
                .unwrap_or_else(|e| {
                    warn!(error = %e, "invalid summer window, using July 1 - August 31");
                    VacationWindow::SUMMER
                });
        let mut rule = VacationRule::from_year_starters(
            name_or_default::<DivisionScheme>(&self.division, "division"),
            parent_or_default(self.even_year_starts_with, "even_year_starts_with"),
            parent_or_default(self.odd_year_starts_with, "odd_year_starts_with"),
        );
        rule.window = window;
        Some(rule)
    }

    fn from_rule(rule: Option<&VacationRule>) -> Self {
        let Some(rule) = rule else {
            return Self {
                enabled: false,
                ..Self::default()
            };
        };
        let (start_month, start_day) = rule.window.start();
        let (end_month, end_day) = rule.window.end();
        let starter = |year| {
            let parent = rule.year_parity.effective_first(rule.first_custodian, year);
            i64::from(parent.number())
        };
        Self {
            enabled: true,
            start_month,
            start_day,
            end_month,
            end_day,
            division: variant_name(&rule.division),
            even_year_starts_with: starter(0),
            odd_year_starts_with: starter(1),
        }
    }
}

impl StoredPatternChange {
    fn into_change(self) -> Option<PatternChange> {
        let Some(effective_from) = parse_date(&self.effective_from) else {
            warn!(
                value = %self.effective_from,
                label = %self.label,
                "skipping pattern change with unparsable date"
            );
            return None;
        };
        let starts_with = parent_or_default(self.starts_with, "starts_with");
        Some(PatternChange::new(
            effective_from,
            self.pattern.to_pattern(starts_with),
            weekday_or_default(self.change_day, "change_day"),
            starts_with,
            self.label,
        ))
    }
}

impl StoredSpecialDate {
    fn into_special_date(self) -> Option<SpecialDate> {
        let Some(date) = parse_date(&self.date) else {
            warn!(
                value = %self.date,
                label = %self.label,
                "skipping special date with unparsable date"
            );
            return None;
        };
        let Some(parent) = Parent::from_number(self.parent) else {
            warn!(%date, parent = self.parent, "skipping special date without a parent");
            return None;
        };
        Some(SpecialDate::new(date, parent, self.label))
    }
}

impl StoredPeriod {
    fn into_period(self) -> Option<NamedPeriod> {
        let (Some(start), Some(end)) = (parse_date(&self.start), parse_date(&self.end)) else {
            warn!(
                start = %self.start,
                end = %self.end,
                label = %self.label,
                "skipping period with unparsable dates"
            );
            return None;
        };
        let custodian = match self.parent {
            0 => CustodianSlot::None,
            n => parent_or_default(n, "period parent").into(),
        };
        NamedPeriod::new(start, end, custodian, self.label)
            .inspect_err(|e| warn!(error = %e, "skipping period"))
            .ok()
    }
}

impl From<&LoadedConfig> for StoredConfig {
    fn from(config: &LoadedConfig) -> Self {
        let schedule = &config.schedule;
        let base = &schedule.base;
        Self {
            parent1_name: config.parent1_name.clone(),
            parent2_name: config.parent2_name.clone(),
            start_date: base.start_date.format(DATE_FORMAT).to_string(),
            pattern: StoredPattern::from_pattern(&base.pattern),
            starts_with: stored_starter(&base.pattern, base.starts_with),
            change_day: i64::from(weekday_number(base.change_day)),
            mode: variant_name(&base.mode),
            summer: StoredSummer::from_rule(schedule.vacation.as_ref()),
            pattern_changes: schedule
                .timeline
                .changes()
                .iter()
                .map(|c| StoredPatternChange {
                    effective_from: c.effective_from.format(DATE_FORMAT).to_string(),
                    pattern: StoredPattern::from_pattern(&c.pattern),
                    starts_with: stored_starter(&c.pattern, c.starts_with),
                    change_day: i64::from(weekday_number(c.change_day)),
                    label: c.label.clone(),
                })
                .collect(),
            special_dates: schedule
                .special_dates
                .iter()
                .map(|s| StoredSpecialDate {
                    date: s.date.format(DATE_FORMAT).to_string(),
                    parent: i64::from(s.custodian.number()),
                    label: s.label.clone(),
                })
                .collect(),
            periods: schedule
                .periods
                .iter()
                .map(|p| StoredPeriod {
                    start: p.start().format(DATE_FORMAT).to_string(),
                    end: p.end().format(DATE_FORMAT).to_string(),
                    parent: i64::from(p.custodian().number()),
                    label: p.label().to_string(),
                })
                .collect(),
        }
    }
}

// ── Field conversion ────────────────────────────────────────────────────

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn parent_or_default(n: i64, field: &str) -> Parent {
    Parent::from_number(n).unwrap_or_else(|| {
        warn!(field, value = n, "parent out of range, using parent 1");
        Parent::Parent1
    })
}

fn weekday_or_default(n: i64, field: &str) -> Weekday {
    weekday_from_number(n).unwrap_or_else(|| {
        warn!(field, value = n, "weekday out of range, using Monday");
        Weekday::Mon
    })
}

fn cycle_days_or_default(n: i64, field: &str) -> u32 {
    match u32::try_from(n) {
        Ok(days) if days > 0 => days,
        _ => {
            warn!(field, value = n, "cycle length not positive, using {DEFAULT_CYCLE_DAYS}");
            DEFAULT_CYCLE_DAYS
        }
    }
}

/// Parse a snake-case unit variant name, falling back to the type's default.
fn name_or_default<T: DeserializeOwned + Default>(name: &str, field: &str) -> T {
    let de: StrDeserializer<'_, ValueError> = name.into_deserializer();
    T::deserialize(de).unwrap_or_else(|_| {
        warn!(field, value = name, "unknown value, using default");
        T::default()
    })
}

fn variant_name<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}

fn name_or(name: String, default: &str) -> String {
    if name.trim().is_empty() {
        warn!(default, "empty parent name, using default");
        default.to_string()
    } else {
        name
    }
}

/// Custom cycles carry their own starter; the alternating patterns take it
/// from the surrounding record.
fn stored_starter(pattern: &CustodyPattern, starts_with: Parent) -> i64 {
    let parent = match pattern {
        CustodyPattern::CustomCycle(cycle) => cycle.starts_with(),
        _ => starts_with,
    };
    i64::from(parent.number())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{resolve, ResolutionSource};
    use crate::vacation::YearParityRule;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 5, 15)
    }

    // ── Defaults ────────────────────────────────────────────────────────

    #[test]
    fn test_empty_document_uses_defaults() {
        let loaded = load_config("{}", today()).unwrap();
        let base = &loaded.schedule.base;
        assert_eq!(
            base.pattern,
            CustodyPattern::AlternateWeeks {
                starts_with: Parent::Parent1
            }
        );
        assert_eq!(base.start_date, today());
        assert_eq!(base.change_day, Weekday::Mon);
        assert_eq!(base.mode, ApplicationMode::Forward);
        assert_eq!(loaded.parent1_name, "Parent 1");
        assert_eq!(loaded.parent2_name, "Parent 2");

        let summer = loaded.schedule.vacation.unwrap();
        assert_eq!(summer.window, VacationWindow::SUMMER);
        assert_eq!(summer.division, DivisionScheme::Half);
        assert_eq!(summer.first_custodian, Parent::Parent1);
        assert_eq!(summer.year_parity, YearParityRule::Even);
        assert!(loaded.schedule.timeline.is_empty());
    }

    #[test]
    fn test_out_of_range_values_substituted() {
        let json = r#"{
            "start_date": "not a date",
            "starts_with": 5,
            "change_day": 9,
            "mode": "sideways",
            "pattern": { "kind": "custom_cycle", "days_parent1": -3, "days_parent2": 0 },
            "summer": { "division": "thirds", "even_year_starts_with": 0 }
        }"#;
        let loaded = load_config(json, today()).unwrap();
        let base = &loaded.schedule.base;
        assert_eq!(base.start_date, today());
        assert_eq!(base.starts_with, Parent::Parent1);
        assert_eq!(base.change_day, Weekday::Mon);
        assert_eq!(base.mode, ApplicationMode::Forward);
        assert_eq!(
            base.pattern,
            CustodyPattern::custom_cycle(7, 7, Parent::Parent1).unwrap()
        );
        let summer = loaded.schedule.vacation.unwrap();
        assert_eq!(summer.division, DivisionScheme::Half);
        // even year falls back to parent 1, odd year stays parent 2
        assert_eq!(summer.year_parity, YearParityRule::Even);
    }

    #[test]
    fn test_unknown_pattern_kind_falls_back_to_alternate_weeks() {
        let json = r#"{ "starts_with": 2, "pattern": { "kind": "fortnightly" } }"#;
        let loaded = load_config(json, today()).unwrap();
        assert_eq!(
            loaded.schedule.base.pattern,
            CustodyPattern::AlternateWeeks {
                starts_with: Parent::Parent2
            }
        );
    }

    #[test]
    fn test_known_names_parse() {
        let json = r#"{ "mode": "from_date", "summer": { "division": "alternate_natural_weeks" } }"#;
        let loaded = load_config(json, today()).unwrap();
        assert_eq!(loaded.schedule.base.mode, ApplicationMode::FromDate);
        assert_eq!(
            loaded.schedule.vacation.unwrap().division,
            DivisionScheme::AlternateNaturalWeeks
        );
    }

    #[test]
    fn test_blank_names_get_defaults() {
        let json = r#"{ "parent1_name": "  ", "parent2_name": "Sam" }"#;
        let loaded = load_config(json, today()).unwrap();
        assert_eq!(loaded.parent1_name, "Parent 1");
        assert_eq!(loaded.name_of(CustodianSlot::Parent2), "Sam");
        assert_eq!(loaded.name_of(CustodianSlot::None), "No custody");
    }

    // ── Records ─────────────────────────────────────────────────────────

    #[test]
    fn test_invalid_records_skipped() {
        let json = r#"{
            "start_date": "2024-01-01",
            "special_dates": [
                { "date": "2024-02-14", "parent": 2, "label": "kept" },
                { "date": "2024-02-15", "parent": 0, "label": "no parent" },
                { "date": "2024-02-31", "parent": 1, "label": "bad date" }
            ],
            "periods": [
                { "start": "2024-03-01", "end": "2024-03-03", "parent": 0, "label": "Grandparents" },
                { "start": "2024-04-10", "end": "2024-04-01", "parent": 1, "label": "backwards" },
                { "start": "", "end": "2024-04-01", "parent": 1 }
            ],
            "pattern_changes": [
                { "effective_from": "2024-06-01", "pattern": { "kind": "alternate_days" }, "label": "kept" },
                { "effective_from": "June", "label": "bad" }
            ]
        }"#;
        let loaded = load_config(json, today()).unwrap();
        let schedule = &loaded.schedule;
        assert_eq!(schedule.special_dates.len(), 1);
        assert_eq!(schedule.special_dates[0].label, "kept");
        assert_eq!(schedule.periods.len(), 1);
        assert!(schedule.periods[0].is_no_custody());
        assert_eq!(schedule.timeline.len(), 1);
        assert_eq!(schedule.timeline.changes()[0].label, "kept");
    }

    #[test]
    fn test_out_of_range_period_parent_becomes_parent1() {
        let json = r#"{ "periods": [ { "start": "2024-03-01", "end": "2024-03-02", "parent": 7 } ] }"#;
        let loaded = load_config(json, today()).unwrap();
        assert_eq!(loaded.schedule.periods[0].custodian(), CustodianSlot::Parent1);
    }

    #[test]
    fn test_summer_disabled_and_custom_window() {
        let loaded = load_config(r#"{ "summer": { "enabled": false } }"#, today()).unwrap();
        assert!(loaded.schedule.vacation.is_none());

        let json = r#"{ "summer": { "start_month": 6, "start_day": 24, "end_month": 9, "end_day": 10 } }"#;
        let loaded = load_config(json, today()).unwrap();
        let window = loaded.schedule.vacation.unwrap().window;
        assert_eq!(window.start(), (6, 24));
        assert_eq!(window.end(), (9, 10));

        let json = r#"{ "summer": { "start_month": 9, "start_day": 1, "end_month": 7, "end_day": 1 } }"#;
        let loaded = load_config(json, today()).unwrap();
        assert_eq!(loaded.schedule.vacation.unwrap().window, VacationWindow::SUMMER);
    }

    #[test]
    fn test_largest_cycle_lengths_resolve() {
        let json = r#"{
            "start_date": "2024-01-01",
            "pattern": { "kind": "custom_cycle", "days_parent1": 4294967295, "days_parent2": 1 }
        }"#;
        let loaded = load_config(json, today()).unwrap();
        assert_eq!(
            loaded.schedule.base.pattern,
            CustodyPattern::custom_cycle(u32::MAX, 1, Parent::Parent1).unwrap()
        );
        let r = resolve(&loaded.schedule, date(2024, 2, 1));
        assert_eq!(r.custodian, CustodianSlot::Parent1);
        assert_eq!(r.source, ResolutionSource::Pattern);
    }

    // ── Errors ──────────────────────────────────────────────────────────

    #[test]
    fn test_not_json_is_an_error() {
        let err = load_config("custody: yes", today()).unwrap_err();
        assert!(matches!(err, CustodyError::InvalidConfig(_)));
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let err = load_config(r#"{ "special_dates": 3 }"#, today()).unwrap_err();
        assert!(matches!(err, CustodyError::InvalidConfig(_)));
    }

    // ── Save / load ─────────────────────────────────────────────────────

    #[test]
    fn test_save_then_load_is_stable() {
        let json = r#"{
            "parent1_name": "Alex",
            "parent2_name": "Sam",
            "start_date": "2024-01-01",
            "pattern": { "kind": "weekdays_weekends", "weekday_parent": 2, "weekend_parent": 1 },
            "change_day": 5,
            "summer": { "division": "biweekly", "even_year_starts_with": 2, "odd_year_starts_with": 2 },
            "special_dates": [ { "date": "2024-02-14", "parent": 2, "label": "Birthday" } ],
            "periods": [ { "start": "2024-03-01", "end": "2024-03-03", "parent": 0, "label": "Trip" } ],
            "pattern_changes": [
                { "effective_from": "2024-09-01", "pattern": { "kind": "custom_cycle", "days_parent1": 5, "days_parent2": 2 }, "starts_with": 2 }
            ]
        }"#;
        let loaded = load_config(json, today()).unwrap();
        let saved = save_config(&loaded).unwrap();
        let reloaded = load_config(&saved, date(1999, 1, 1)).unwrap();
        assert_eq!(reloaded, loaded);
        assert_eq!(save_config(&reloaded).unwrap(), saved);
    }

    #[test]
    fn test_saved_document_shape() {
        let loaded = load_config(r#"{ "start_date": "2024-01-01" }"#, today()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&save_config(&loaded).unwrap()).unwrap();
        assert_eq!(value["start_date"], "2024-01-01");
        assert_eq!(value["pattern"]["kind"], "alternate_weeks");
        assert_eq!(value["mode"], "forward");
        assert_eq!(value["summer"]["division"], "half");
        assert_eq!(value["summer"]["even_year_starts_with"], 1);
        assert_eq!(value["summer"]["odd_year_starts_with"], 2);
    }

    #[test]
    fn test_loaded_schedule_resolves() {
        let json = r#"{
            "start_date": "2024-01-01",
            "special_dates": [ { "date": "2024-01-10", "parent": 1, "label": "Recital" } ]
        }"#;
        let loaded = load_config(json, today()).unwrap();
        let r = resolve(&loaded.schedule, date(2024, 1, 10));
        assert_eq!(r.custodian, CustodianSlot::Parent1);
        assert_eq!(r.source, ResolutionSource::SpecialDate);
        assert_eq!(
            resolve(&loaded.schedule, date(2024, 1, 11)).custodian,
            CustodianSlot::Parent2
        );
        // 2025 is odd, so parent 2 opens the summer
        assert_eq!(
            resolve(&loaded.schedule, date(2025, 7, 1)).custodian,
            CustodianSlot::Parent2
        );
    }
}
