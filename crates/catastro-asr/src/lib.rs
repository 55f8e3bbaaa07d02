//! # catastro-asr
//!
//! Speech transcription boundary for catastro-rs. Survey audio comes in as
//! bytes; best-effort Spanish text comes out, together with the provider's
//! confidence and word list. The extraction pipeline treats this as a black
//! box: failures surface as a single [`AsrError`] with a readable message and
//! never as a partially interpreted transcript.
//!
//! The shipped provider is [`AssemblyAi`]; anything that can produce text
//! from audio can implement [`SpeechToText`] instead.
//!
//! ```no_run
//! use catastro_asr::{AssemblyAi, SpeechToText};
//!
//! let provider = AssemblyAi::from_env()?;
//! let audio = std::fs::read("visita.mp3")?;
//! let transcript = provider.transcribe(&audio)?;
//! println!("{} ({} words)", transcript.text, transcript.words.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assemblyai;
pub mod error;

pub use assemblyai::AssemblyAi;
pub use error::{AsrError, Result};

use serde::{Deserialize, Serialize};

/// Best-effort transcription of one audio submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Full transcript text.
    pub text: String,
    /// Overall provider confidence, 0.0 to 1.0, when reported.
    pub confidence: Option<f64>,
    /// Transcript tokens in order, for downstream diagnostics.
    pub words: Vec<String>,
}

/// Converts audio bytes into a [`Transcript`].
pub trait SpeechToText {
    /// Transcribe one audio submission.
    ///
    /// # Errors
    ///
    /// Returns [`AsrError`] when the provider cannot produce a transcript;
    /// there are no partial successes.
    fn transcribe(&self, audio: &[u8]) -> Result<Transcript>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_round_trips_as_json() {
        let transcript = Transcript {
            text: "predio ubicado en Lima".into(),
            confidence: Some(0.91),
            words: vec!["predio".into(), "ubicado".into(), "en".into(), "Lima".into()],
        };
        let json = serde_json::to_string(&transcript).unwrap();
        let back: Transcript = serde_json::from_str(&json).unwrap();
        assert_eq!(back, transcript);
    }
}
