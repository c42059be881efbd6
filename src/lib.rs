//! Lecture Tutor - keyword-matched answers with spoken narration.

pub mod api;
pub mod config;
pub mod enrollment;
pub mod knowledge;
pub mod lecture;
pub mod narration;
pub mod tutor;
