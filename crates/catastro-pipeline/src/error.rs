//! Error types for pipeline execution

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Top-level pipeline failures.
///
/// Field-level problems are never errors - they are recorded on the field as
/// `VACIO`/`FORMATO_INVALIDO` codes and the pipeline continues. Only the
/// external recognizer boundary can fail a whole request.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The entity recognizer could not produce spans
    #[error("entity recognizer failed: {message}")]
    Recognizer {
        /// Human-readable provider message
        message: String,
    },

    /// A span list supplied as JSON could not be parsed
    #[error("malformed span list: {0}")]
    SpanParse(#[from] serde_json::Error),
}

impl PipelineError {
    /// Create a recognizer failure
    #[inline]
    #[must_use = "creates an error that should be returned or handled"]
    pub fn recognizer(message: impl Into<String>) -> Self {
        Self::Recognizer {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizer_error_display() {
        let error = PipelineError::recognizer("model not loaded");
        assert_eq!(
            format!("{error}"),
            "entity recognizer failed: model not loaded"
        );
    }
}
