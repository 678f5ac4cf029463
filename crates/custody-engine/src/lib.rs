//! # custody-engine
//!
//! Deterministic custody resolution for shared-parenting calendars.
//!
//! Given a configured schedule, the engine answers "which parent has the
//! child on this date" for any date, by walking a fixed priority chain of
//! user-authored exceptions down to a recurring base pattern, and tallies
//! those answers over a range.
//!
//! ## Modules
//!
//! - [`resolver`] — The priority chain: single-date and range resolution
//! - [`stats`] — Per-custodian and per-source day counts over a range
//! - [`pattern`] — Recurring patterns (alternate weeks/days, weekday/weekend, custom cycles)
//! - [`anchor`] — Base-pattern anchoring and the pattern-change timeline
//! - [`vacation`] — Automatic division of a recurring vacation window
//! - [`records`] — Pattern changes, special dates and named periods
//! - [`schedule`] — The immutable configuration snapshot
//! - [`config`] — Loading and saving stored configuration with safe defaults
//! - [`holidays`] — Easter and Christmas period suggestions
//! - [`custodian`] — Parent and custodian slot types
//! - [`calendar`] — Date arithmetic helpers
//! - [`error`] — Error types

pub mod anchor;
pub mod calendar;
pub mod config;
pub mod custodian;
pub mod error;
pub mod holidays;
pub mod pattern;
pub mod records;
pub mod resolver;
pub mod schedule;
pub mod stats;
pub mod vacation;

pub use anchor::{pattern_parent, ApplicationMode, BaseSchedule, PatternTimeline};
pub use config::{load_config, save_config, LoadedConfig, StoredConfig};
pub use custodian::{CustodianSlot, Parent};
pub use error::{CustodyError, Result};
pub use holidays::{christmas_halves, easter_sunday, holy_week};
pub use pattern::{CustodyPattern, CustomCycle};
pub use records::{NamedPeriod, PatternChange, SpecialDate};
pub use resolver::{resolve, resolve_range, Resolution, ResolutionSource};
pub use schedule::CustodySchedule;
pub use stats::{aggregate, CustodyStats};
pub use vacation::{divide, DivisionScheme, VacationRule, VacationWindow, YearParityRule};
