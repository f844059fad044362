//! Pay settings types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The hourly rate assumed when no settings file exists yet.
pub const DEFAULT_HOURLY_RATE: Decimal = Decimal::from_parts(1500, 0, 0, false, 2);

/// Pay settings applied when deriving expected pay from a parsed timecard.
///
/// # Example
///
/// ```
/// use timecard_engine::config::{DEFAULT_HOURLY_RATE, PaySettings};
///
/// let settings = PaySettings::default();
/// assert_eq!(settings.hourly_rate, DEFAULT_HOURLY_RATE);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaySettings {
    /// The flat hourly rate used for expected-pay derivation.
    pub hourly_rate: Decimal,
}

impl Default for PaySettings {
    fn default() -> Self {
        Self {
            hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_hourly_rate_is_15() {
        assert_eq!(DEFAULT_HOURLY_RATE, Decimal::from_str("15.00").unwrap());
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let settings: PaySettings = serde_yaml::from_str("hourly_rate: 18.50\n").unwrap();
        assert_eq!(
            settings.hourly_rate,
            Decimal::from_str("18.50").unwrap()
        );
    }

    #[test]
    fn test_serialize_round_trip() {
        let settings = PaySettings {
            hourly_rate: Decimal::from_str("21.25").unwrap(),
        };
        let yaml = serde_yaml::to_string(&settings).unwrap();
        let back: PaySettings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(settings, back);
    }
}
