//! The timecard text parser.
//!
//! This module turns the raw extracted text of a timecard document into a
//! validated [`ParsedPayPeriod`](crate::models::ParsedPayPeriod). It is
//! organized as a cascade: three line-matching strategies tried from
//! strictest to loosest, each match normalized by the date/time and hours
//! leaves, the survivors assembled into the final record set.

mod assembler;
mod datetime;
mod hours;
mod strategies;

pub use assembler::parse_timecard;
pub use datetime::{extract_clock_time, extract_weekday_abbreviation, normalize_date};
pub use hours::{HoursBreakdown, MAX_PLAUSIBLE_DAY_HOURS, resolve_hours, resolve_prefixed};
pub use strategies::{HourFields, MAX_FLEXIBLE_SHIFTS, STRATEGIES, ShiftCandidate, Strategy};
