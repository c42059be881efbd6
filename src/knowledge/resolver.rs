//! Keyword-based answer selection.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::base::KnowledgeBase;

/// Explanation returned when no entry of a known topic matches.
pub const NO_MATCH_EXPLANATION: &str =
    "Could not find a specific answer. Please try rephrasing your question.";

/// Explanation returned for a topic missing from the knowledge base.
#[must_use]
pub fn unknown_topic_explanation(topic: &str) -> String {
    format!("Sorry, I don't have information on {topic} yet.")
}

/// A resolved answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub explanation: String,
    pub chart_data: Option<serde_json::Value>,
}

impl Answer {
    fn text_only(explanation: impl Into<String>) -> Self {
        Self {
            explanation: explanation.into(),
            chart_data: None,
        }
    }
}

/// Selects answers from a shared [`KnowledgeBase`].
#[derive(Debug, Clone)]
pub struct AnswerResolver {
    knowledge: Arc<KnowledgeBase>,
}

impl AnswerResolver {
    #[must_use]
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    /// Resolve a question within a topic.
    ///
    /// The first entry, in stored order, with a keyword contained in the
    /// lowercased question wins. Unknown topics and unmatched questions get
    /// fixed fallback explanations rather than errors.
    #[must_use]
    pub fn resolve(&self, topic: &str, question: &str) -> Answer {
        let Some(entries) = self.knowledge.entries(topic) else {
            tracing::debug!(topic = %topic, "Topic not in knowledge base");
            return Answer::text_only(unknown_topic_explanation(topic));
        };

        let question_lower = question.to_lowercase();
        match entries.iter().position(|entry| entry.matches(&question_lower)) {
            Some(index) => {
                tracing::debug!(topic = %topic, entry = index, "Matched knowledge entry");
                let entry = &entries[index];
                Answer {
                    explanation: entry.response.clone(),
                    chart_data: entry.chart_data.clone(),
                }
            }
            None => Answer::text_only(NO_MATCH_EXPLANATION),
        }
    }
}
