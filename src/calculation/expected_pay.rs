//! Expected pay derivation.

use rust_decimal::Decimal;

/// Computes the expected gross pay for a pay period.
///
/// The pay model is a flat hourly rate over the total worked hours; overtime
/// premium multipliers are applied by the payroll system downstream, not
/// here. The result is rounded to cents with banker's rounding.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::calculate_expected_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay = calculate_expected_pay(
///     Decimal::from_str("27.75").unwrap(),
///     Decimal::from_str("15.00").unwrap(),
/// );
/// assert_eq!(pay, Decimal::from_str("416.25").unwrap());
/// ```
pub fn calculate_expected_pay(total_hours: Decimal, hourly_rate: Decimal) -> Decimal {
    (total_hours * hourly_rate).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// EP-001: flat rate times total hours
    #[test]
    fn test_flat_rate_times_hours() {
        assert_eq!(calculate_expected_pay(dec("40"), dec("15.00")), dec("600.00"));
    }

    /// EP-002: fractional hours round to cents
    #[test]
    fn test_fractional_hours_round_to_cents() {
        // 13.33 * 15.75 = 209.9475 -> 209.95 at two decimal places
        assert_eq!(
            calculate_expected_pay(dec("13.33"), dec("15.75")),
            dec("209.95")
        );
    }

    /// EP-003: zero hours pay nothing
    #[test]
    fn test_zero_hours() {
        assert_eq!(calculate_expected_pay(Decimal::ZERO, dec("15.00")), dec("0"));
    }
}
