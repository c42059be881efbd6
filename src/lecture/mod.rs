//! Recorded tutoring interactions.

mod recorder;
mod types;

pub use recorder::{InMemoryLectures, LectureRepository};
pub use types::{Lecture, NewLecture};
