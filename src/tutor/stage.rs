//! Per-request stage tracking.

use serde::{Deserialize, Serialize};

/// Stage a tutoring request has reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStage {
    #[default]
    Received,
    Gated,
    Resolved,
    Narrated,
    Recorded,
    Responded,
    /// Stopped by the enrollment gate.
    Rejected,
    /// Stopped by a server-side failure.
    Failed,
}

impl RequestStage {
    /// Whether no further transition is expected.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Responded | Self::Rejected | Self::Failed)
    }
}

/// Tracks one request through its stages.
#[derive(Debug, Clone, Default)]
pub struct RequestTrace {
    stage: RequestStage,
}

impl RequestTrace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stage(&self) -> RequestStage {
        self.stage
    }

    pub fn transition(&mut self, new_stage: RequestStage) {
        tracing::debug!(from = ?self.stage, to = ?new_stage, "Request stage transition");
        self.stage = new_stage;
    }
}
