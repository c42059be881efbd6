//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::enrollment::{Course, Student};

/// Default port, matching the port the service has always listened on.
pub const DEFAULT_PORT: u16 = 5000;

/// Environment variable that overrides the configured port.
pub const PORT_ENV: &str = "PORT";

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether to enable permissive CORS.
    pub cors_permissive: bool,
    /// Directory served as the static site root.
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            cors_permissive: true,
            public_dir: PathBuf::from("public"),
        }
    }
}

impl ServerConfig {
    /// Apply a `PORT` environment value. Unparseable values are ignored.
    pub fn apply_port_env(&mut self, value: Option<&str>) {
        let Some(value) = value else { return };
        match value.trim().parse() {
            Ok(port) => self.port = port,
            Err(_) => tracing::warn!(value = %value, "Ignoring invalid {PORT_ENV} value"),
        }
    }
}

/// Knowledge base location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Path to the knowledge base JSON file.
    pub path: PathBuf,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("knowledge/knowledge.json"),
        }
    }
}

/// Speech synthesis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrationConfig {
    /// Synthesizer program to spawn.
    #[serde(default = "default_program")]
    pub program: String,
    /// Voice name; the synthesizer default when unset.
    #[serde(default)]
    pub voice: Option<String>,
    /// Speaking speed multiplier.
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Directory generated audio files are written to.
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,
    /// URL prefix under which `audio_dir` is served.
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
    /// Upper bound on a single synthesis call, in seconds. Must be positive.
    #[serde(
        default = "default_timeout_secs",
        deserialize_with = "deserialize_timeout_secs"
    )]
    pub timeout_secs: u64,
}

fn default_program() -> String {
    "espeak-ng".to_string()
}

const fn default_speed() -> f32 {
    1.0
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("public/audio")
}

fn default_url_prefix() -> String {
    "/audio".to_string()
}

const fn default_timeout_secs() -> u64 {
    60
}

fn deserialize_timeout_secs<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match u64::deserialize(deserializer)? {
        0 => Err(serde::de::Error::custom(
            "timeout_secs must be greater than zero",
        )),
        secs => Ok(secs),
    }
}

impl NarrationConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            voice: None,
            speed: default_speed(),
            audio_dir: default_audio_dir(),
            url_prefix: default_url_prefix(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    pub server: ServerConfig,
    pub knowledge: KnowledgeConfig,
    pub narration: NarrationConfig,
    /// Students seeded into the in-memory store.
    pub students: Vec<Student>,
    /// Courses seeded into the in-memory store.
    pub courses: Vec<Course>,
}
