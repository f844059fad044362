//! Hour totals aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Shift;

/// Hour totals for a pay period, split by pay category.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::{HourTotals, summarize_hours};
/// use timecard_engine::models::Shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let shifts = vec![Shift {
///     date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
///     time_in: "07:00 AM".to_string(),
///     time_out: "08:30 PM".to_string(),
///     hours: Decimal::from_str("13.50").unwrap(),
///     reg_hours: Decimal::from_str("8.00").unwrap(),
///     ot1_hours: Decimal::from_str("5.50").unwrap(),
///     department: String::new(),
/// }];
///
/// let totals = summarize_hours(&shifts);
/// assert_eq!(totals.total_hours, Decimal::from_str("13.50").unwrap());
/// assert_eq!(totals.overtime_hours, Decimal::from_str("5.50").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourTotals {
    /// Total worked hours across all shifts.
    pub total_hours: Decimal,
    /// Regular (non-overtime) hours across all shifts.
    pub regular_hours: Decimal,
    /// First-tier overtime hours across all shifts.
    pub overtime_hours: Decimal,
}

/// Sums the hour columns of the given shifts.
pub fn summarize_hours(shifts: &[Shift]) -> HourTotals {
    HourTotals {
        total_hours: shifts.iter().map(|s| s.hours).sum(),
        regular_hours: shifts.iter().map(|s| s.reg_hours).sum(),
        overtime_hours: shifts.iter().map(|s| s.ot1_hours).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_shift(hours: &str, reg: &str, ot1: &str) -> Shift {
        Shift {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            time_in: "07:00 AM".to_string(),
            time_out: "03:00 PM".to_string(),
            hours: dec(hours),
            reg_hours: dec(reg),
            ot1_hours: dec(ot1),
            department: String::new(),
        }
    }

    /// HT-001: totals sum across shifts by category
    #[test]
    fn test_totals_sum_by_category() {
        let shifts = vec![
            make_shift("8.00", "8.00", "0"),
            make_shift("13.50", "8.00", "5.50"),
            make_shift("6.25", "6.25", "0"),
        ];
        let totals = summarize_hours(&shifts);
        assert_eq!(totals.total_hours, dec("27.75"));
        assert_eq!(totals.regular_hours, dec("22.25"));
        assert_eq!(totals.overtime_hours, dec("5.50"));
    }

    /// HT-002: no shifts sums to zero
    #[test]
    fn test_empty_shifts_sum_to_zero() {
        let totals = summarize_hours(&[]);
        assert_eq!(totals.total_hours, Decimal::ZERO);
        assert_eq!(totals.regular_hours, Decimal::ZERO);
        assert_eq!(totals.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_totals_serialization() {
        let totals = summarize_hours(&[make_shift("8.00", "8.00", "0")]);
        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"total_hours\":\"8.00\""));

        let deserialized: HourTotals = serde_json::from_str(&json).unwrap();
        assert_eq!(totals, deserialized);
    }
}
