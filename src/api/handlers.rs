//! HTTP request handlers for the timecard parsing API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_expected_pay, summarize_hours};
use crate::parser::parse_timecard;

use super::request::ParseRequest;
use super::response::{ApiError, ApiErrorResponse, ParseResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/parse", post(parse_handler))
        .with_state(state)
}

/// Handler for the POST /parse endpoint.
///
/// Accepts extracted timecard text and returns the parsed pay period with
/// derived hour totals and expected pay.
async fn parse_handler(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing parse request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {err}"))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let hourly_rate = request
        .hourly_rate
        .unwrap_or(state.settings().hourly_rate);

    // Run the parser
    let start_time = Instant::now();
    match parse_timecard(&request.text) {
        Ok(pay_period) => {
            let totals = summarize_hours(&pay_period.shifts);
            let expected_pay = calculate_expected_pay(totals.total_hours, hourly_rate);
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                shifts = pay_period.shifts.len(),
                total_hours = %totals.total_hours,
                expected_pay = %expected_pay,
                duration_us = duration.as_micros(),
                "Parse completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ParseResponse {
                    pay_period,
                    totals,
                    hourly_rate,
                    expected_pay,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Parse failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
