//! Boundary to the external PDF text-extraction collaborator.
//!
//! Turning the binary PDF into plain text is not this crate's job; an
//! external facility does it and this module only enforces the contract at
//! the seam: the extraction must finish within a wall-clock budget, and its
//! failure is reported distinctly from an unrecognizable document so callers
//! can tell "bad file" apart from "slow or broken extraction".

use std::fmt;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::{TimecardError, TimecardResult};

/// Wall-clock budget for the upstream text-extraction step.
pub const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Races a text-extraction future against [`EXTRACTION_TIMEOUT`].
///
/// The future is whatever the collaborator provides, as long as it resolves
/// to the extracted text or a displayable error.
///
/// # Errors
///
/// - [`TimecardError::ExtractionTimeout`] when the deadline elapses first.
/// - [`TimecardError::ExtractionFailed`] when the collaborator itself fails.
///
/// # Example
///
/// ```
/// use timecard_engine::extraction::extract_text_with_timeout;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let text = extract_text_with_timeout(async {
///     Ok::<_, String>("1/1/24   Mon 7:00a   Deli   Mon 3:00p8.00".to_string())
/// })
/// .await
/// .unwrap();
/// assert!(text.contains("7:00a"));
/// # }
/// ```
pub async fn extract_text_with_timeout<F, E>(extraction: F) -> TimecardResult<String>
where
    F: Future<Output = Result<String, E>>,
    E: fmt::Display,
{
    match tokio::time::timeout(EXTRACTION_TIMEOUT, extraction).await {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(source)) => {
            let message = source.to_string();
            warn!(error = %message, "PDF text extraction failed");
            Err(TimecardError::ExtractionFailed { message })
        }
        Err(_) => {
            warn!(
                seconds = EXTRACTION_TIMEOUT.as_secs(),
                "PDF text extraction timed out"
            );
            Err(TimecardError::ExtractionTimeout {
                seconds: EXTRACTION_TIMEOUT.as_secs(),
            })
        }
    }
}
