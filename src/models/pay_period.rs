//! Parsed pay period model.
//!
//! This module contains the [`ParsedPayPeriod`] type, the sole output of the
//! timecard parser: the recovered shifts plus the inferred date span.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Shift;

/// The result of parsing one timecard document.
///
/// The date span is derived from the shift dates (min/max); the shifts keep
/// the order in which they were discovered in the text, which is not
/// necessarily date order. Consumers may re-sort.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{ParsedPayPeriod, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = ParsedPayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
///     shifts: vec![Shift {
///         date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
///         time_in: "07:00 AM".to_string(),
///         time_out: "03:00 PM".to_string(),
///         hours: Decimal::from(8),
///         reg_hours: Decimal::from(8),
///         ot1_hours: Decimal::ZERO,
///         department: String::new(),
///     }],
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()));
/// assert_eq!(period.total_hours(), Decimal::from(8));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedPayPeriod {
    /// The earliest shift date in the document (inclusive).
    pub start_date: NaiveDate,
    /// The latest shift date in the document (inclusive).
    pub end_date: NaiveDate,
    /// The recovered shifts, in discovery order.
    pub shifts: Vec<Shift>,
}

impl ParsedPayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Sums the total worked hours across all shifts in the period.
    pub fn total_hours(&self) -> Decimal {
        self.shifts.iter().map(|s| s.hours).sum()
    }
}
