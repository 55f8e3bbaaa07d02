//! AssemblyAI transcription provider
//!
//! Three-call REST flow: upload the audio bytes, create a Spanish-language
//! transcript job, poll until the job settles. The provider is a black box
//! to the pipeline - it either returns best-effort text or one error.

use crate::error::{AsrError, Result};
use crate::{SpeechToText, Transcript};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);
const DEFAULT_MAX_POLLS: u32 = 100;

/// AssemblyAI-backed [`SpeechToText`] provider.
///
/// The API key comes from `$ASSEMBLYAI_API_KEY` ([`AssemblyAi::from_env`]) or
/// is passed explicitly. Jobs are created with the Spanish language code and
/// the provider's best speech model, matching the field survey audio this
/// system ingests.
#[derive(Debug, Clone)]
pub struct AssemblyAi {
    api_key: String,
    base_url: String,
    poll_interval: Duration,
    max_polls: u32,
    agent: ureq::Agent,
}

#[derive(Debug, Serialize)]
struct CreateJob<'a> {
    audio_url: &'a str,
    language_code: &'a str,
    speech_model: &'a str,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Debug, Deserialize)]
struct JobResponse {
    id: String,
    status: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    words: Option<Vec<WordEntry>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WordEntry {
    text: String,
}

impl AssemblyAi {
    /// Provider with an explicit API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: DEFAULT_MAX_POLLS,
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(10))
                .timeout_read(Duration::from_secs(60))
                .build(),
        }
    }

    /// Provider configured from `$ASSEMBLYAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`AsrError::MissingApiKey`] when the variable is unset or
    /// empty.
    pub fn from_env() -> Result<Self> {
        match std::env::var("ASSEMBLYAI_API_KEY") {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(AsrError::MissingApiKey),
        }
    }

    /// Override the API endpoint (tests, proxies).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the polling cadence.
    #[must_use]
    pub fn with_polling(mut self, interval: Duration, max_polls: u32) -> Self {
        self.poll_interval = interval;
        self.max_polls = max_polls;
        self
    }

    fn upload(&self, audio: &[u8]) -> Result<String> {
        let response: UploadResponse = self
            .agent
            .post(&format!("{}/v2/upload", self.base_url))
            .set("authorization", &self.api_key)
            .set("content-type", "application/octet-stream")
            .send_bytes(audio)?
            .into_json()?;
        Ok(response.upload_url)
    }

    fn create_job(&self, audio_url: &str) -> Result<JobResponse> {
        let body = serde_json::to_string(&CreateJob {
            audio_url,
            language_code: "es",
            speech_model: "best",
        })
        .map_err(|e| AsrError::provider(format!("job payload encode failed: {e}")))?;
        let response: JobResponse = self
            .agent
            .post(&format!("{}/v2/transcript", self.base_url))
            .set("authorization", &self.api_key)
            .set("content-type", "application/json")
            .send_string(&body)?
            .into_json()?;
        Ok(response)
    }

    fn poll_job(&self, id: &str) -> Result<JobResponse> {
        let url = format!("{}/v2/transcript/{id}", self.base_url);
        for poll in 0..self.max_polls {
            let job: JobResponse = self
                .agent
                .get(&url)
                .set("authorization", &self.api_key)
                .call()?
                .into_json()?;
            match job.status.as_str() {
                "completed" => return Ok(job),
                "error" => {
                    return Err(AsrError::provider(
                        job.error.unwrap_or_else(|| "unspecified provider error".into()),
                    ))
                }
                _ => log::debug!("transcript {id} still {} (poll {poll})", job.status),
            }
            std::thread::sleep(self.poll_interval);
        }
        Err(AsrError::Timeout {
            polls: self.max_polls,
        })
    }
}

impl SpeechToText for AssemblyAi {
    fn transcribe(&self, audio: &[u8]) -> Result<Transcript> {
        let audio_url = self.upload(audio)?;
        let job = self.create_job(&audio_url)?;
        log::info!("transcript job {} created ({} bytes of audio)", job.id, audio.len());
        let done = self.poll_job(&job.id)?;
        Ok(Transcript {
            text: done.text.unwrap_or_default(),
            confidence: done.confidence,
            words: done
                .words
                .unwrap_or_default()
                .into_iter()
                .map(|w| w.text)
                .collect(),
        })
    }
}
