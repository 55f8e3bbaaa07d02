//! Error types for speech transcription

/// Result type for transcription operations
pub type Result<T> = std::result::Result<T, AsrError>;

/// Errors surfaced by the transcription boundary.
///
/// Everything collapses into one failure toward the caller - a transcript
/// either arrives whole or the request fails with a readable message. The
/// extraction pipeline never interprets partial transcripts.
#[derive(Debug, thiserror::Error)]
pub enum AsrError {
    /// No API key configured
    #[error("ASSEMBLYAI_API_KEY is not set")]
    MissingApiKey,

    /// HTTP transport or status failure
    #[error("transcription request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    /// Response body could not be read or decoded
    #[error("transcription response unreadable: {0}")]
    Io(#[from] std::io::Error),

    /// The provider reported the transcription job as failed
    #[error("transcription failed: {message}")]
    Provider {
        /// Provider-supplied failure description
        message: String,
    },

    /// The job did not complete within the polling budget
    #[error("transcription did not complete after {polls} polls")]
    Timeout {
        /// Number of status polls performed
        polls: u32,
    },
}

impl AsrError {
    /// Create a provider failure
    #[inline]
    #[must_use = "creates an error that should be returned or handled"]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }
}

impl From<ureq::Error> for AsrError {
    fn from(err: ureq::Error) -> Self {
        Self::Http(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let error = AsrError::provider("audio too short");
        assert_eq!(format!("{error}"), "transcription failed: audio too short");
    }

    #[test]
    fn test_missing_key_display() {
        assert_eq!(
            format!("{}", AsrError::MissingApiKey),
            "ASSEMBLYAI_API_KEY is not set"
        );
    }
}
