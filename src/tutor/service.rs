//! Request orchestration: gate, resolve, narrate, record.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::TutorError;
use super::stage::{RequestStage, RequestTrace};
use crate::config::TutorConfig;
use crate::enrollment::{deserialize_id, EnrollmentGate, InMemoryCourses, InMemoryStudents};
use crate::knowledge::{AnswerResolver, KnowledgeBase};
use crate::lecture::{InMemoryLectures, LectureRepository, NewLecture};
use crate::narration::{CommandSynthesizer, Narrator};

/// A student's question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub student_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub course_id: String,
    pub topic: String,
    pub question: String,
}

/// The answer to a successful request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorReply {
    pub explanation: String,
    pub chart_data: Option<serde_json::Value>,
    pub audio_url: String,
    pub lecture_id: u64,
}

/// Answers tutoring requests.
#[derive(Clone)]
pub struct TutorService {
    gate: EnrollmentGate,
    resolver: AnswerResolver,
    narrator: Narrator,
    lectures: Arc<dyn LectureRepository>,
}

impl TutorService {
    #[must_use]
    pub fn new(
        gate: EnrollmentGate,
        resolver: AnswerResolver,
        narrator: Narrator,
        lectures: Arc<dyn LectureRepository>,
    ) -> Self {
        Self {
            gate,
            resolver,
            narrator,
            lectures,
        }
    }

    /// Wire the service from configuration, using in-memory stores seeded
    /// from the config and the command-line synthesizer.
    #[must_use]
    pub fn from_config(config: &TutorConfig, knowledge: Arc<KnowledgeBase>) -> Self {
        let students: InMemoryStudents = config.students.iter().cloned().collect();
        let courses: InMemoryCourses = config.courses.iter().cloned().collect();
        tracing::info!(
            students = students.len(),
            courses = courses.len(),
            "Seeded enrollment stores"
        );

        let synthesizer = CommandSynthesizer::new(config.narration.program.clone());
        Self::new(
            EnrollmentGate::new(Arc::new(students), Arc::new(courses)),
            AnswerResolver::new(knowledge),
            Narrator::new(Arc::new(synthesizer), &config.narration),
            Arc::new(InMemoryLectures::new()),
        )
    }

    #[must_use]
    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    #[must_use]
    pub fn lectures(&self) -> &Arc<dyn LectureRepository> {
        &self.lectures
    }

    /// Handle one request.
    ///
    /// A lecture is recorded only once narration has succeeded. No step is
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns [`TutorError::Access`] when the gate rejects the request and
    /// [`TutorError::Narration`] when audio synthesis fails.
    pub async fn handle(&self, request: TutorRequest) -> Result<TutorReply, TutorError> {
        let mut trace = RequestTrace::new();

        if let Err(e) = self
            .gate
            .check_access(&request.student_id, &request.course_id, &request.topic)
        {
            trace.transition(RequestStage::Rejected);
            tracing::info!(
                student_id = %request.student_id,
                course_id = %request.course_id,
                topic = %request.topic,
                reason = %e,
                "Request rejected"
            );
            return Err(e.into());
        }
        trace.transition(RequestStage::Gated);

        let answer = self.resolver.resolve(&request.topic, &request.question);
        trace.transition(RequestStage::Resolved);

        let narration = match self.narrator.narrate(&answer.explanation).await {
            Ok(narration) => narration,
            Err(e) => {
                trace.transition(RequestStage::Failed);
                tracing::error!(error = %e, topic = %request.topic, "Narration failed");
                return Err(e.into());
            }
        };
        trace.transition(RequestStage::Narrated);

        let lecture = self.lectures.add(NewLecture {
            course_id: request.course_id,
            topic: request.topic,
            question: request.question,
            response: answer.explanation.clone(),
            chart_data: answer.chart_data.clone(),
            audio_url: narration.audio_url.clone(),
        });
        trace.transition(RequestStage::Recorded);

        tracing::info!(
            lecture_id = lecture.id,
            course_id = %lecture.course_id,
            topic = %lecture.topic,
            "Answered question"
        );
        trace.transition(RequestStage::Responded);

        Ok(TutorReply {
            explanation: answer.explanation,
            chart_data: answer.chart_data,
            audio_url: narration.audio_url,
            lecture_id: lecture.id,
        })
    }
}

impl std::fmt::Debug for TutorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TutorService")
            .field("gate", &self.gate)
            .field("resolver", &self.resolver)
            .field("narrator", &self.narrator)
            .finish_non_exhaustive()
    }
}
