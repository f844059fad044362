//! Shift model.
//!
//! This module defines the [`Shift`] struct representing one worked interval
//! recovered from timecard text, with its regular/overtime hour split.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rounding tolerance when checking that `hours` equals `reg_hours + ot1_hours`.
///
/// Hour values are printed with two-decimal precision in timecard exports, so
/// any drift beyond a cent of an hour indicates a misparsed line.
pub const SPLIT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// One worked interval recovered from a timecard document.
///
/// Shifts are value records: the parser constructs them fully validated and
/// they are never mutated afterwards.
///
/// # Example
///
/// ```
/// use timecard_engine::models::Shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let shift = Shift {
///     date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     time_in: "07:00 AM".to_string(),
///     time_out: "03:30 PM".to_string(),
///     hours: Decimal::from_str("8.50").unwrap(),
///     reg_hours: Decimal::from_str("8.00").unwrap(),
///     ot1_hours: Decimal::from_str("0.50").unwrap(),
///     department: "Bakery".to_string(),
/// };
/// assert!(shift.has_overtime());
/// assert!(shift.split_matches_total());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Clock-in time in canonical 12-hour `HH:MM AM|PM` form.
    pub time_in: String,
    /// Clock-out time in canonical 12-hour `HH:MM AM|PM` form.
    pub time_out: String,
    /// Total worked hours for the shift.
    pub hours: Decimal,
    /// Regular (non-overtime) hours; equals `hours` when no overtime is present.
    pub reg_hours: Decimal,
    /// First-tier overtime hours; zero when the shift has no overtime.
    pub ot1_hours: Decimal,
    /// Department label from the timecard; may be empty.
    #[serde(default)]
    pub department: String,
}

impl Shift {
    /// Returns `true` if the shift carries any first-tier overtime hours.
    pub fn has_overtime(&self) -> bool {
        self.ot1_hours > Decimal::ZERO
    }

    /// Checks the record invariant: total hours must equal the sum of the
    /// regular and overtime split, within [`SPLIT_TOLERANCE`].
    pub fn split_matches_total(&self) -> bool {
        let diff = self.hours - (self.reg_hours + self.ot1_hours);
        diff.abs() <= SPLIT_TOLERANCE
    }

    /// Returns the day of the week for the shift date.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_engine::models::Shift;
    /// use chrono::{NaiveDate, Weekday};
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift {
    ///     date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), // Monday
    ///     time_in: "07:00 AM".to_string(),
    ///     time_out: "03:00 PM".to_string(),
    ///     hours: Decimal::from(8),
    ///     reg_hours: Decimal::from(8),
    ///     ot1_hours: Decimal::ZERO,
    ///     department: String::new(),
    /// };
    /// assert_eq!(shift.day_of_week(), Weekday::Mon);
    /// ```
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}
