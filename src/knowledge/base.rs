//! Static per-topic knowledge base.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::KnowledgeError;

/// One keyword-triggered answer within a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicEntry {
    /// Lowercased keywords; any one of them appearing in a question selects this entry.
    pub keywords: Vec<String>,
    /// Explanation returned to the student.
    pub response: String,
    /// Optional chart payload, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<serde_json::Value>,
}

impl TopicEntry {
    /// Create an entry, lowercasing its keywords.
    #[must_use]
    pub fn new(keywords: &[&str], response: impl Into<String>) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            response: response.into(),
            chart_data: None,
        }
    }

    /// Attach chart data (builder pattern).
    #[must_use]
    pub fn with_chart(mut self, chart_data: serde_json::Value) -> Self {
        self.chart_data = Some(chart_data);
        self
    }

    /// Whether this entry matches an already-lowercased question.
    #[must_use]
    pub fn matches(&self, question_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| question_lower.contains(keyword.as_str()))
    }

    fn normalize(mut self) -> Self {
        for keyword in &mut self.keywords {
            *keyword = keyword.to_lowercase();
        }
        self
    }
}

/// Immutable mapping from lowercase topic name to its ordered entries.
///
/// Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    topics: HashMap<String, Vec<TopicEntry>>,
}

impl KnowledgeBase {
    /// Build a knowledge base from `(topic, entries)` pairs.
    ///
    /// Topic names and keywords are lowercased. Entry order is preserved; topics
    /// whose names differ only in case are merged in iteration order.
    pub fn from_topics<I, S>(topics: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<TopicEntry>)>,
        S: AsRef<str>,
    {
        let mut merged: HashMap<String, Vec<TopicEntry>> = HashMap::new();
        for (name, entries) in topics {
            merged
                .entry(name.as_ref().to_lowercase())
                .or_default()
                .extend(entries.into_iter().map(TopicEntry::normalize));
        }
        Self { topics: merged }
    }

    /// Parse a knowledge base from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not an object of topic name to entry
    /// list, or if two topic names differ only in case.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Vec<TopicEntry>> = serde_json::from_str(content)?;

        let mut seen: HashMap<String, &str> = HashMap::new();
        for name in raw.keys() {
            if let Some(other) = seen.insert(name.to_lowercase(), name) {
                let (first, second) = if other < name.as_str() {
                    (other, name.as_str())
                } else {
                    (name.as_str(), other)
                };
                return Err(serde::de::Error::custom(format!(
                    "duplicate topic: {first:?} and {second:?} differ only in case"
                )));
            }
        }

        Ok(Self::from_topics(raw))
    }

    /// Load a knowledge base from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let base = Self::from_json(&content).map_err(|source| KnowledgeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            topics = base.topic_count(),
            "Loaded knowledge base"
        );
        Ok(base)
    }

    /// Entries for a topic, looked up case-insensitively.
    #[must_use]
    pub fn entries(&self, topic: &str) -> Option<&[TopicEntry]> {
        self.topics.get(&topic.to_lowercase()).map(Vec::as_slice)
    }

    /// Number of topics.
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Iterate over topic names.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }
}
