//! Narration error types.

use std::time::Duration;

/// Errors that can occur while synthesizing narration audio.
#[derive(thiserror::Error, Debug)]
pub enum NarrationError {
    /// The synthesis program was not found.
    #[error("Speech synthesizer not found: {0}")]
    NotFound(String),

    /// Permission denied when spawning the synthesizer.
    #[error("Permission denied")]
    PermissionDenied,

    /// The synthesizer ran but reported failure.
    #[error("Speech synthesis failed ({status}): {stderr}")]
    Failed { status: String, stderr: String },

    /// Synthesis did not finish in time.
    #[error("Speech synthesis timed out after {0:?}")]
    Timeout(Duration),

    /// Other I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NarrationError {
    /// Create a `NarrationError` from a spawn failure, classifying common cases.
    pub(crate) fn from_spawn(program: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(program.to_string()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(err),
        }
    }
}
