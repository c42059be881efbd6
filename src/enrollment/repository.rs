//! Student and course repositories.

use std::collections::HashMap;
use std::sync::RwLock;

use super::types::{Course, Student};

/// Lookup and insertion of students.
pub trait StudentRepository: Send + Sync {
    /// Find a student by id.
    fn get(&self, id: &str) -> Option<Student>;

    /// Insert or replace a student.
    fn add(&self, student: Student);
}

/// Lookup and insertion of courses.
pub trait CourseRepository: Send + Sync {
    /// Find a course by id.
    fn get(&self, id: &str) -> Option<Course>;

    /// Insert or replace a course.
    fn add(&self, course: Course);
}

/// In-memory student store.
#[derive(Debug, Default)]
pub struct InMemoryStudents {
    students: RwLock<HashMap<String, Student>>,
}

impl InMemoryStudents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored students.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.read().expect("RwLock poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<Student> for InMemoryStudents {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        let students = iter.into_iter().map(|s| (s.id.clone(), s)).collect();
        Self {
            students: RwLock::new(students),
        }
    }
}

impl StudentRepository for InMemoryStudents {
    fn get(&self, id: &str) -> Option<Student> {
        self.students
            .read()
            .expect("RwLock poisoned")
            .get(id)
            .cloned()
    }

    fn add(&self, student: Student) {
        self.students
            .write()
            .expect("RwLock poisoned")
            .insert(student.id.clone(), student);
    }
}

/// In-memory course store.
#[derive(Debug, Default)]
pub struct InMemoryCourses {
    courses: RwLock<HashMap<String, Course>>,
}

impl InMemoryCourses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored courses.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.read().expect("RwLock poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<Course> for InMemoryCourses {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        let courses = iter.into_iter().map(|c| (c.id.clone(), c)).collect();
        Self {
            courses: RwLock::new(courses),
        }
    }
}

impl CourseRepository for InMemoryCourses {
    fn get(&self, id: &str) -> Option<Course> {
        self.courses.read().expect("RwLock poisoned").get(id).cloned()
    }

    fn add(&self, course: Course) {
        self.courses
            .write()
            .expect("RwLock poisoned")
            .insert(course.id.clone(), course);
    }
}
