//! Knowledge base error types.

use std::path::PathBuf;

/// Errors that can occur while loading the knowledge base.
#[derive(thiserror::Error, Debug)]
pub enum KnowledgeError {
    /// The knowledge base file could not be read.
    #[error("Failed to read knowledge base {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The knowledge base file is not valid.
    #[error("Failed to parse knowledge base {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
