//! Error types for the timecard parsing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while extracting text from a
//! timecard document and parsing it into shift records.

use thiserror::Error;

/// The main error type for the timecard parsing engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timecard_engine::error::TimecardError;
///
/// let error = TimecardError::InvalidDateFormat {
///     raw: "1/15".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid date format: 1/15");
/// ```
#[derive(Debug, Error)]
pub enum TimecardError {
    /// A date token did not match the expected `M/D/YY` or `M/D/YYYY` layout.
    #[error("Invalid date format: {raw}")]
    InvalidDateFormat {
        /// The raw token that failed to parse.
        raw: String,
    },

    /// A time token did not contain a compact clock time like `7:00a`.
    #[error("Invalid time format: {raw}")]
    InvalidTimeFormat {
        /// The raw token that failed to parse.
        raw: String,
    },

    /// No strategy recognized any shift line in the document text.
    #[error(
        "Could not find any shifts in PDF. Please check the PDF format matches the expected timecard format."
    )]
    NoShiftsFound,

    /// The upstream text-extraction collaborator did not finish in time.
    #[error("PDF text extraction timed out after {seconds} seconds")]
    ExtractionTimeout {
        /// The timeout that was exceeded, in seconds.
        seconds: u64,
    },

    /// The upstream text-extraction collaborator failed outright.
    #[error("PDF text extraction failed: {message}")]
    ExtractionFailed {
        /// A description of the extraction failure.
        message: String,
    },

    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return TimecardError.
pub type TimecardResult<T> = Result<T, TimecardError>;
