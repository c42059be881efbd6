//! Knowledge base loading and answer resolution.

mod base;
mod error;
mod resolver;

pub use base::{KnowledgeBase, TopicEntry};
pub use error::KnowledgeError;
pub use resolver::{unknown_topic_explanation, Answer, AnswerResolver, NO_MATCH_EXPLANATION};
