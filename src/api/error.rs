//! Server error types and HTTP error rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::enrollment::AccessError;
use crate::tutor::TutorError;

/// Errors that can occur while running the server.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    /// Failed to bind to address.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// HTTP status for a tutoring error.
#[must_use]
pub fn status_for(error: &TutorError) -> StatusCode {
    match error {
        TutorError::Access(AccessError::StudentNotFound | AccessError::CourseNotFound) => {
            StatusCode::NOT_FOUND
        }
        TutorError::Access(AccessError::NotEnrolled) => StatusCode::FORBIDDEN,
        TutorError::Access(AccessError::TopicNotCovered) | TutorError::InvalidRequest(_) => {
            StatusCode::BAD_REQUEST
        }
        TutorError::Narration(_) | TutorError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for TutorError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
