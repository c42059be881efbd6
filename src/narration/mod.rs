//! Audio narration of explanations.

mod error;
mod narrator;
mod synthesizer;

pub use error::NarrationError;
pub use narrator::{Narration, Narrator};
pub use synthesizer::{CommandSynthesizer, SpeechSynthesizer, BASE_WORDS_PER_MINUTE};
