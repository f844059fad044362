//! Request types for the timecard parsing API.
//!
//! This module defines the JSON request structure for the `/parse` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the `/parse` endpoint.
///
/// Carries the plain text already extracted from the timecard PDF by the
/// upstream extraction facility, plus an optional hourly-rate override for
/// the expected-pay derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    /// The extracted timecard text.
    pub text: String,
    /// Optional override for the configured hourly rate.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_parse_request() {
        let json = r#"{
            "text": "1/1/24   Mon 7:00a   Deli   Mon 3:00p8.00"
        }"#;

        let request: ParseRequest = serde_json::from_str(json).unwrap();
        assert!(request.text.contains("7:00a"));
        assert_eq!(request.hourly_rate, None);
    }

    #[test]
    fn test_deserialize_with_rate_override() {
        let json = r#"{
            "text": "1/1/24   Mon 7:00a   Deli   Mon 3:00p8.00",
            "hourly_rate": "18.50"
        }"#;

        let request: ParseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.hourly_rate,
            Some(Decimal::from_str("18.50").unwrap())
        );
    }

    #[test]
    fn test_missing_text_field_is_rejected() {
        let result = serde_json::from_str::<ParseRequest>(r#"{"hourly_rate": "18.50"}"#);
        assert!(result.is_err());
    }
}
