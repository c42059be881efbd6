//! Lecture record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An interaction waiting to be recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLecture {
    pub course_id: String,
    pub topic: String,
    pub question: String,
    pub response: String,
    pub chart_data: Option<serde_json::Value>,
    pub audio_url: String,
}

/// A recorded tutoring interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecture {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    pub course_id: String,
    pub topic: String,
    pub question: String,
    pub response: String,
    pub chart_data: Option<serde_json::Value>,
    /// Root-relative URL of the narration.
    pub audio_url: String,
    pub created_at: DateTime<Utc>,
}

impl Lecture {
    /// Stamp a new lecture with its id and creation time.
    #[must_use]
    pub fn from_new(id: u64, new: NewLecture) -> Self {
        Self {
            id,
            course_id: new.course_id,
            topic: new.topic,
            question: new.question,
            response: new.response,
            chart_data: new.chart_data,
            audio_url: new.audio_url,
            created_at: Utc::now(),
        }
    }
}
