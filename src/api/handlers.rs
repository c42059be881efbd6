//! HTTP handlers for the tutor API.

use std::any::Any;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::tutor::{TutorError, TutorReply, TutorRequest, TutorService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub tutor: Arc<TutorService>,
}

impl AppState {
    #[must_use]
    pub fn new(tutor: Arc<TutorService>) -> Self {
        Self { tutor }
    }
}

/// POST /api/tutor - Answer a question and narrate the answer.
pub async fn post_tutor(
    State(state): State<AppState>,
    payload: Result<Json<TutorRequest>, JsonRejection>,
) -> Result<Json<TutorReply>, TutorError> {
    let Json(request) = payload.map_err(|e| TutorError::InvalidRequest(e.body_text()))?;
    state.tutor.handle(request).await.map(Json)
}

/// Render a panic inside a handler as a generic server error.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    TutorError::Unexpected(detail).into_response()
}
