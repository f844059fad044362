//! Response types for the timecard parsing API.
//!
//! This module defines the success payload, the error response structures,
//! and the error mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::HourTotals;
use crate::error::TimecardError;
use crate::models::ParsedPayPeriod;

/// Success payload for the `/parse` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    /// The parsed pay period with its recovered shifts.
    pub pay_period: ParsedPayPeriod,
    /// Hour totals across the recovered shifts.
    pub totals: HourTotals,
    /// The hourly rate that was applied.
    pub hourly_rate: Decimal,
    /// Expected gross pay at the applied rate.
    pub expected_pay: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TimecardError> for ApiErrorResponse {
    fn from(error: TimecardError) -> Self {
        match error {
            TimecardError::NoShiftsFound => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "NO_SHIFTS_FOUND",
                    TimecardError::NoShiftsFound.to_string(),
                    "None of the line-matching strategies recognized a shift line",
                ),
            },
            TimecardError::InvalidDateFormat { raw } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new(
                    "INVALID_DATE_FORMAT",
                    format!("Invalid date format: {raw}"),
                ),
            },
            TimecardError::InvalidTimeFormat { raw } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new(
                    "INVALID_TIME_FORMAT",
                    format!("Invalid time format: {raw}"),
                ),
            },
            TimecardError::ExtractionTimeout { seconds } => ApiErrorResponse {
                status: StatusCode::GATEWAY_TIMEOUT,
                error: ApiError::new(
                    "EXTRACTION_TIMEOUT",
                    format!("PDF text extraction timed out after {seconds} seconds"),
                ),
            },
            TimecardError::ExtractionFailed { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "EXTRACTION_FAILED",
                    "PDF text extraction failed",
                    message,
                ),
            },
            TimecardError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Settings error",
                    format!("Settings file not found: {path}"),
                ),
            },
            TimecardError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Settings parse error",
                    format!("Failed to parse {path}: {message}"),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_no_shifts_found_maps_to_422() {
        let response: ApiErrorResponse = TimecardError::NoShiftsFound.into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "NO_SHIFTS_FOUND");
        assert!(response.error.message.contains("Could not find any shifts"));
    }

    #[test]
    fn test_extraction_timeout_maps_to_504() {
        let response: ApiErrorResponse =
            TimecardError::ExtractionTimeout { seconds: 30 }.into();
        assert_eq!(response.status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(response.error.code, "EXTRACTION_TIMEOUT");
    }

    #[test]
    fn test_config_error_maps_to_500() {
        let response: ApiErrorResponse = TimecardError::ConfigNotFound {
            path: "/missing.yaml".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }
}
