//! Pay derivation for parsed pay periods.
//!
//! This module contains the downstream aggregation applied to a parsed
//! timecard: summing the recovered shifts into hour totals and deriving the
//! expected gross pay from an hourly rate.

mod expected_pay;
mod hour_totals;

pub use expected_pay::calculate_expected_pay;
pub use hour_totals::{HourTotals, summarize_hours};
