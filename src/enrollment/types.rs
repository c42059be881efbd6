//! Student and course records.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// A student and the courses they are enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "enrolledCourses", deserialize_with = "deserialize_ids")]
    pub enrolled_courses: HashSet<String>,
}

impl Student {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            enrolled_courses: HashSet::new(),
        }
    }

    /// Enroll in a course (builder pattern).
    #[must_use]
    pub fn enrolled_in(mut self, course_id: impl Into<String>) -> Self {
        self.enrolled_courses.insert(course_id.into());
        self
    }

    #[must_use]
    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.enrolled_courses.contains(course_id)
    }
}

/// A course and the topics it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Lowercase topic names.
    #[serde(default)]
    pub topics: HashSet<String>,
}

impl Course {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            topics: HashSet::new(),
        }
    }

    /// Add a covered topic (builder pattern).
    #[must_use]
    pub fn covering(mut self, topic: &str) -> Self {
        self.topics.insert(topic.to_lowercase());
        self
    }

    /// Whether the course covers a topic, ignoring case.
    #[must_use]
    pub fn covers(&self, topic: &str) -> bool {
        let topic = topic.to_lowercase();
        self.topics.iter().any(|t| t.to_lowercase() == topic)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Accept an identifier given either as a string or as a JSON integer.
///
/// # Errors
///
/// Returns an error if the value is neither a string nor an unsigned integer.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::into_string)
}

/// Accept a list of identifiers, each given either as a string or as an integer.
///
/// # Errors
///
/// Returns an error if the value is not a list or an element is not an identifier.
pub fn deserialize_ids<'de, D>(deserializer: D) -> Result<HashSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<RawId>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(RawId::into_string).collect())
}
