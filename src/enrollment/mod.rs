//! Students, courses, and the enrollment gate.

mod gate;
mod repository;
mod types;

pub use gate::{AccessError, EnrollmentGate};
pub use repository::{CourseRepository, InMemoryCourses, InMemoryStudents, StudentRepository};
pub use types::{deserialize_id, deserialize_ids, Course, Student};
