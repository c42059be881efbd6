//! HTTP API, audio and static file serving.

mod error;
mod handlers;
mod server;

pub use error::{status_for, ErrorResponse, ServerError};
pub use handlers::{handle_panic, post_tutor, AppState};
pub use server::TutorServer;
