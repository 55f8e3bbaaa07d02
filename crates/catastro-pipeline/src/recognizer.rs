//! The entity-recognizer boundary
//!
//! Recognition itself is an external capability (a trained NER model served
//! elsewhere); the pipeline only depends on this trait. Implementations must
//! be deterministic for a fixed input. Spans may overlap and arrive in any
//! order - the fuser sorts.

use crate::error::Result;
use catastro_core::Span;

/// Produces labeled spans over sanitized input text.
pub trait EntityRecognizer {
    /// Recognize entities in `text`. Offsets are character positions into
    /// `text`.
    fn recognize(&self, text: &str) -> Result<Vec<Span>>;
}

/// A recognizer that always answers with a fixed span list, regardless of
/// input. This is how externally computed recognition results (e.g. the NER
/// service's JSON output) enter the pipeline, and the test double.
#[derive(Debug, Clone, Default)]
pub struct StaticSpans {
    spans: Vec<Span>,
}

impl StaticSpans {
    /// Wrap an already-computed span list.
    #[must_use]
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Parse a span list from the JSON array shape the NER service emits:
    /// `[{"label": ..., "text": ..., "start": ..., "end": ...}, ...]`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::SpanParse`](crate::PipelineError::SpanParse)
    /// when the JSON does not describe a span list.
    pub fn from_json(json: &str) -> Result<Self> {
        let spans: Vec<Span> = serde_json::from_str(json)?;
        Ok(Self::new(spans))
    }
}

impl EntityRecognizer for StaticSpans {
    fn recognize(&self, _text: &str) -> Result<Vec<Span>> {
        Ok(self.spans.clone())
    }
}

/// Degraded mode: no recognizer available, no spans. The pipeline still
/// produces a record - full-text derivations (the catastral-code scan) can
/// populate fields on their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRecognizer;

impl EntityRecognizer for NoRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<Span>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_spans_from_json() {
        let recognizer = StaticSpans::from_json(
            r#"[{"label":"DNI","text":"45128890","start":4,"end":12,"score":0.93}]"#,
        )
        .unwrap();
        let spans = recognizer.recognize("whatever").unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].label, "DNI");
        assert_eq!(spans[0].score, Some(0.93));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(StaticSpans::from_json("{not json").is_err());
    }

    #[test]
    fn test_no_recognizer_is_empty() {
        assert_eq!(NoRecognizer.recognize("texto").unwrap(), Vec::new());
    }
}
