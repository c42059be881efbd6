//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use lecture_tutor::config::NarrationConfig;
use lecture_tutor::enrollment::{
    Course, EnrollmentGate, InMemoryCourses, InMemoryStudents, Student,
};
use lecture_tutor::knowledge::{AnswerResolver, KnowledgeBase, TopicEntry};
use lecture_tutor::lecture::{InMemoryLectures, LectureRepository};
use lecture_tutor::narration::{NarrationError, Narrator, SpeechSynthesizer};
use lecture_tutor::tutor::{TutorRequest, TutorService};

/// Synthesizer that writes a placeholder WAV header, or fails on demand.
#[derive(Default)]
pub struct FakeSynth {
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl FakeSynth {
    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeSynth {
    async fn synthesize(
        &self,
        _text: &str,
        _voice: Option<&str>,
        _speed: f32,
        destination: &Path,
    ) -> Result<(), NarrationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(NarrationError::Failed {
                status: "exit status: 1".to_string(),
                stderr: "no audio device".to_string(),
            });
        }
        tokio::fs::write(destination, b"RIFF0000WAVE").await?;
        Ok(())
    }
}

/// Knowledge base used across tests.
pub fn knowledge() -> KnowledgeBase {
    KnowledgeBase::from_topics([
        (
            "math",
            vec![
                TopicEntry::new(&["derivative"], "A derivative measures rate of change")
                    .with_chart(json!({ "labels": ["x", "x^2"], "values": [1, 2] })),
                TopicEntry::new(&["integral"], "An integral accumulates area"),
            ],
        ),
        (
            "history",
            vec![TopicEntry::new(&["rome"], "Rome fell in 476")],
        ),
    ])
}

/// Student "1" takes courses "101" and "999" (which does not exist);
/// student "2" takes nothing. Course "101" covers math and physics.
pub fn gate() -> EnrollmentGate {
    let students: InMemoryStudents = [
        Student::new("1").enrolled_in("101").enrolled_in("999"),
        Student::new("2"),
    ]
    .into_iter()
    .collect();
    let courses: InMemoryCourses = [Course::new("101").covering("math").covering("physics")]
        .into_iter()
        .collect();
    EnrollmentGate::new(Arc::new(students), Arc::new(courses))
}

/// A service wired with fixtures and the given synthesizer.
pub fn service(
    synth: Arc<FakeSynth>,
    audio_dir: &Path,
) -> (TutorService, Arc<dyn LectureRepository>) {
    let config = NarrationConfig {
        audio_dir: audio_dir.to_path_buf(),
        ..NarrationConfig::default()
    };
    let lectures: Arc<dyn LectureRepository> = Arc::new(InMemoryLectures::new());
    let service = TutorService::new(
        gate(),
        AnswerResolver::new(Arc::new(knowledge())),
        Narrator::new(synth, &config),
        lectures.clone(),
    );
    (service, lectures)
}

pub fn request(student: &str, course: &str, topic: &str, question: &str) -> TutorRequest {
    TutorRequest {
        student_id: student.to_string(),
        course_id: course.to_string(),
        topic: topic.to_string(),
        question: question.to_string(),
    }
}
