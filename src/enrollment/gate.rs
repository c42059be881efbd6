//! Access checks for tutoring requests.

use std::sync::Arc;

use super::repository::{CourseRepository, StudentRepository};

/// Reasons a student may not ask about a topic.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    #[error("Student not found")]
    StudentNotFound,

    #[error("Student not enrolled in this course")]
    NotEnrolled,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Topic not covered in this course")]
    TopicNotCovered,
}

/// Confirms enrollment and topic coverage against the student and course stores.
#[derive(Clone)]
pub struct EnrollmentGate {
    students: Arc<dyn StudentRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl EnrollmentGate {
    #[must_use]
    pub fn new(students: Arc<dyn StudentRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { students, courses }
    }

    /// Check that a student may ask about `topic` in a course.
    ///
    /// Checks run in order: student exists, student enrolled, course exists,
    /// course covers the topic (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns the first failing check as an [`AccessError`].
    pub fn check_access(
        &self,
        student_id: &str,
        course_id: &str,
        topic: &str,
    ) -> Result<(), AccessError> {
        let student = self
            .students
            .get(student_id)
            .ok_or(AccessError::StudentNotFound)?;
        if !student.is_enrolled(course_id) {
            return Err(AccessError::NotEnrolled);
        }

        let course = self
            .courses
            .get(course_id)
            .ok_or(AccessError::CourseNotFound)?;
        if !course.covers(topic) {
            return Err(AccessError::TopicNotCovered);
        }

        Ok(())
    }
}

impl std::fmt::Debug for EnrollmentGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrollmentGate").finish_non_exhaustive()
    }
}
