//! Narration of explanations into served audio files.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use super::error::NarrationError;
use super::synthesizer::SpeechSynthesizer;
use crate::config::NarrationConfig;

/// A completed narration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    /// Location of the audio file on disk.
    pub path: PathBuf,
    /// Root-relative URL the file is served under.
    pub audio_url: String,
}

/// Produces one audio file per explanation.
#[derive(Clone)]
pub struct Narrator {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    audio_dir: PathBuf,
    url_prefix: String,
    voice: Option<String>,
    speed: f32,
    timeout: Duration,
}

impl Narrator {
    #[must_use]
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, config: &NarrationConfig) -> Self {
        Self {
            synthesizer,
            audio_dir: config.audio_dir.clone(),
            url_prefix: normalize_prefix(&config.url_prefix),
            voice: config.voice.clone(),
            speed: config.speed,
            timeout: config.timeout(),
        }
    }

    /// Directory audio files are written to.
    #[must_use]
    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }

    /// URL prefix audio files are served under: `/`-led, or empty for the site root.
    #[must_use]
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Pick a fresh destination for the next narration.
    ///
    /// Names combine a millisecond timestamp with a random suffix so that
    /// concurrent requests never share a file.
    #[must_use]
    pub fn next_destination(&self) -> Narration {
        let file_name = format!(
            "response_{}_{}.wav",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple()
        );
        Narration {
            path: self.audio_dir.join(&file_name),
            audio_url: format!("{}/{}", self.url_prefix.trim_end_matches('/'), file_name),
        }
    }

    /// Synthesize `text` into a new audio file.
    ///
    /// # Errors
    ///
    /// Returns an error if the audio directory cannot be created, the
    /// synthesizer fails, or synthesis exceeds the configured timeout.
    pub async fn narrate(&self, text: &str) -> Result<Narration, NarrationError> {
        tokio::fs::create_dir_all(&self.audio_dir).await?;

        let narration = self.next_destination();
        let synthesis = self.synthesizer.synthesize(
            text,
            self.voice.as_deref(),
            self.speed,
            &narration.path,
        );

        let result = match tokio::time::timeout(self.timeout, synthesis).await {
            Ok(result) => result,
            Err(_) => Err(NarrationError::Timeout(self.timeout)),
        };

        match result {
            Ok(()) => {
                tracing::debug!(path = %narration.path.display(), "Narration complete");
                Ok(narration)
            }
            Err(e) => {
                // Best effort; the file may never have been created.
                let _ = tokio::fs::remove_file(&narration.path).await;
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for Narrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Narrator")
            .field("audio_dir", &self.audio_dir)
            .field("url_prefix", &self.url_prefix)
            .field("voice", &self.voice)
            .field("speed", &self.speed)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
