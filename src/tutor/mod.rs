//! Tutoring request handling.

mod error;
mod service;
mod stage;

pub use error::{TutorError, GENERIC_FAILURE_MESSAGE};
pub use service::{TutorReply, TutorRequest, TutorService};
pub use stage::{RequestStage, RequestTrace};
