//! Tutoring request errors.

use crate::enrollment::AccessError;
use crate::narration::NarrationError;

/// Message shown to callers for any server-side failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process request";

/// Errors that end a tutoring request.
#[derive(thiserror::Error, Debug)]
pub enum TutorError {
    /// The enrollment gate rejected the request.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// The request body could not be understood.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Narration failed.
    #[error("Narration failed: {0}")]
    Narration(#[from] NarrationError),

    /// Any other fault.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl TutorError {
    /// Whether the caller caused this error.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Access(_) | Self::InvalidRequest(_))
    }

    /// Message safe to return to the caller.
    ///
    /// Client errors are surfaced verbatim; server errors are replaced with
    /// [`GENERIC_FAILURE_MESSAGE`].
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            GENERIC_FAILURE_MESSAGE.to_string()
        }
    }
}
