//! Lecture log.

use std::sync::Mutex;

use super::types::{Lecture, NewLecture};

/// Append-only store of lectures.
pub trait LectureRepository: Send + Sync {
    /// Assign the next id to `lecture`, append it, and return the stored record.
    fn add(&self, lecture: NewLecture) -> Lecture;

    /// Find a lecture by id.
    fn get(&self, id: u64) -> Option<Lecture>;

    /// All lectures in the order they were recorded.
    fn list(&self) -> Vec<Lecture>;
}

#[derive(Debug)]
struct LectureLog {
    next_id: u64,
    lectures: Vec<Lecture>,
}

/// In-memory lecture log.
///
/// Id assignment and append happen under one lock, so ids are strictly
/// increasing in log order.
#[derive(Debug)]
pub struct InMemoryLectures {
    log: Mutex<LectureLog>,
}

impl InMemoryLectures {
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Mutex::new(LectureLog {
                next_id: 1,
                lectures: Vec::new(),
            }),
        }
    }

    /// Number of recorded lectures.
    ///
    /// # Panics
    ///
    /// Panics if the internal `Mutex` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.lock().expect("Mutex poisoned").lectures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryLectures {
    fn default() -> Self {
        Self::new()
    }
}

impl LectureRepository for InMemoryLectures {
    fn add(&self, lecture: NewLecture) -> Lecture {
        let mut log = self.log.lock().expect("Mutex poisoned");
        let id = log.next_id;
        log.next_id = log.next_id.saturating_add(1);

        let lecture = Lecture::from_new(id, lecture);
        log.lectures.push(lecture.clone());
        tracing::debug!(lecture_id = id, course_id = %lecture.course_id, "Recorded lecture");
        lecture
    }

    fn get(&self, id: u64) -> Option<Lecture> {
        let log = self.log.lock().expect("Mutex poisoned");
        // Ids start at 1 and are never reused, so they index the log directly.
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        log.lectures.get(index).cloned()
    }

    fn list(&self) -> Vec<Lecture> {
        self.log.lock().expect("Mutex poisoned").lectures.clone()
    }
}
