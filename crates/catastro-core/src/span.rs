//! Recognizer spans and field provenance
//!
//! A [`Span`] is a labeled substring of the sanitized input text, as produced
//! by the external entity recognizer. A [`SpanRef`] is the audit form kept on
//! every field result: either a copy of a recognizer span, or a synthetic
//! entry naming the derivation rule that produced the value.

use serde::{Deserialize, Serialize};

/// Provenance label for a UBIGEO code looked up from the geographic catalog.
pub const INFERIDO: &str = "INFERIDO";
/// Provenance label for a construction date fused from MES + ANIO spans.
pub const MES_ANIO_FUSION: &str = "MES/ANIO_FUSION";
/// Provenance label for a catastral code re-extracted from the full text.
pub const REPARADO_FULLTEXT: &str = "REPARADO_FULLTEXT";
/// Provenance label for a catastral code found only in the full text.
pub const INFERIDO_FULLTEXT: &str = "INFERIDO_FULLTEXT";

/// A labeled text span produced by the entity recognizer.
///
/// Offsets are character positions into the sanitized text. Spans may overlap
/// and several spans may carry the same label; no ordering is guaranteed by
/// the recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Raw recognizer label (not yet mapped to a [`FieldKey`](crate::FieldKey)).
    pub label: String,
    /// Surface text of the span.
    pub text: String,
    /// Start offset, in characters.
    pub start: usize,
    /// End offset, in characters (exclusive).
    pub end: usize,
    /// Recognizer confidence, when the model reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Span {
    /// Convenience constructor for tests and static span lists.
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            start,
            end,
            score: None,
        }
    }
}

/// Audit record of where a field value came from.
///
/// Synthetic provenance entries ([`INFERIDO`], [`MES_ANIO_FUSION`],
/// [`REPARADO_FULLTEXT`], [`INFERIDO_FULLTEXT`]) carry no offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanRef {
    pub label: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

impl SpanRef {
    /// Audit copy of a recognizer span.
    #[must_use]
    pub fn from_span(span: &Span) -> Self {
        Self {
            label: span.label.clone(),
            text: span.text.clone(),
            start: Some(span.start),
            end: Some(span.end),
        }
    }

    /// Provenance entry for a derived value; carries no offsets.
    #[must_use]
    pub fn synthetic(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            start: None,
            end: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_json_shape() {
        let span = Span::new("DNI", "45128890", 10, 18);
        let json = serde_json::to_value(&span).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"label": "DNI", "text": "45128890", "start": 10, "end": 18})
        );
    }

    #[test]
    fn test_span_deserializes_without_score() {
        let span: Span =
            serde_json::from_str(r#"{"label":"LOTE","text":"lote 5","start":0,"end":6}"#).unwrap();
        assert_eq!(span.score, None);
        assert_eq!(span.text, "lote 5");
    }

    #[test]
    fn test_synthetic_ref_has_no_offsets() {
        let sref = SpanRef::synthetic(INFERIDO, "150101");
        let json = serde_json::to_value(&sref).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"label": "INFERIDO", "text": "150101"})
        );
    }
}
