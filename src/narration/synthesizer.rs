//! Text-to-speech backends.
//!
//! [`SpeechSynthesizer`] is the seam to the external speech engine. The
//! default backend, [`CommandSynthesizer`], spawns an `espeak-ng` compatible
//! program that writes a WAV file.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use super::error::NarrationError;

/// Speaking rate, in words per minute, at speed 1.0.
pub const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// Converts text into an audio file.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Render `text` to `destination`, succeeding or failing as a whole.
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
        speed: f32,
        destination: &Path,
    ) -> Result<(), NarrationError>;
}

/// Synthesizer backed by an external command-line program.
#[derive(Debug, Clone)]
pub struct CommandSynthesizer {
    program: String,
}

impl CommandSynthesizer {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the command-line arguments.
    #[must_use]
    pub fn build_args(
        text: &str,
        voice: Option<&str>,
        speed: f32,
        destination: &Path,
    ) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(voice) = voice {
            args.push("-v".to_string());
            args.push(voice.to_string());
        }

        args.push("-s".to_string());
        args.push(words_per_minute(speed).to_string());
        args.push("-w".to_string());
        args.push(destination.display().to_string());
        args.push("--".to_string());
        args.push(text.to_string());

        args
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn words_per_minute(speed: f32) -> u32 {
    (BASE_WORDS_PER_MINUTE * speed).round().max(1.0) as u32
}

#[async_trait]
impl SpeechSynthesizer for CommandSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
        speed: f32,
        destination: &Path,
    ) -> Result<(), NarrationError> {
        let args = Self::build_args(text, voice, speed, destination);
        tracing::debug!(
            program = %self.program,
            destination = %destination.display(),
            "Spawning speech synthesizer"
        );

        let child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| NarrationError::from_spawn(&self.program, e))?;

        let output = child.wait_with_output().await?;
        if output.status.success() {
            Ok(())
        } else {
            Err(NarrationError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
