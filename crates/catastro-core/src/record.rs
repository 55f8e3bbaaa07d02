//! Canonical record types
//!
//! The output of one processing run: a map of [`FieldResult`]s keyed by
//! [`FieldKey`], the full recognizer span list for audit, and a summary that
//! partitions the fields into valid / invalid / empty. Consumers identify
//! fields by key, never by position; map ordering follows the form layout
//! (the derived `Ord` on [`FieldKey`]) so serialized records are stable.

use crate::field::FieldKey;
use crate::span::SpanRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A normalized field value.
///
/// Most fields normalize to text; measurements normalize to numbers and the
/// utility-service indicators to booleans. Serialized untagged, so the wire
/// form is the plain JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Whether the value counts as empty for validation and summary purposes.
    ///
    /// Empty text, a `false` flag and a zero quantity are all "nothing was
    /// captured" in this record format.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(t) => t.is_empty(),
            Self::Number(n) => *n == 0.0,
            Self::Flag(f) => !f,
        }
    }

    /// Canonical string rendering used for structural pattern checks.
    ///
    /// Numbers render via `f64`'s `Display`, so integer-valued quantities
    /// carry no trailing `.0` (`120.0` renders as `"120"`).
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(t) => t.clone(),
            Self::Number(n) => n.to_string(),
            Self::Flag(f) => {
                if *f {
                    "1".to_string()
                } else {
                    String::new()
                }
            }
        }
    }

    /// Borrow the textual form, when the value is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Field-level error codes, serialized under their original wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Normalized value absent or empty.
    #[serde(rename = "VACIO")]
    Vacio,
    /// Normalized value present but failing the field's structural rule.
    #[serde(rename = "FORMATO_INVALIDO")]
    FormatoInvalido,
    /// Zoning value equal to the literal document marker `DNI` - a known
    /// recognizer confusion, always rejected.
    #[serde(rename = "COINCIDE_LITERAL_DNI")]
    CoincideLiteralDni,
}

/// The per-field outcome of one processing run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldResult {
    /// Best candidate's surface text, as extracted.
    pub raw: Option<String>,
    /// Canonical value after normalization, if any survived.
    pub normalized: Option<FieldValue>,
    /// Outcome of structural validation.
    pub valid: Option<bool>,
    /// Error codes recorded by validation and derivation guards, in order.
    pub errors: Vec<ErrorCode>,
    /// Every span (or derivation rule) that contributed; never empty in an
    /// assembled record.
    pub sources: Vec<SpanRef>,
}

/// Counts that partition the record's fields: every field lands in exactly
/// one bucket, with emptiness taking precedence over invalidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub valid_count: usize,
    pub invalid_count: usize,
    pub empty_count: usize,
}

/// The canonical, validated record for one input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Character count of the sanitized input.
    pub input_length: usize,
    /// Per-field results, keyed canonically; no recognized field is dropped,
    /// even when invalid or empty.
    pub fields: BTreeMap<FieldKey, FieldResult>,
    /// Valid/invalid/empty partition of `fields`.
    pub summary: Summary,
    /// Every recognizer span, mapped or not, for audit.
    pub spans: Vec<SpanRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_untagged_serialization() {
        assert_eq!(
            serde_json::to_string(&FieldValue::Text("LIMA".into())).unwrap(),
            "\"LIMA\""
        );
        assert_eq!(
            serde_json::to_string(&FieldValue::Number(120.5)).unwrap(),
            "120.5"
        );
        assert_eq!(
            serde_json::to_string(&FieldValue::Flag(true)).unwrap(),
            "true"
        );
    }

    #[test]
    fn test_emptiness_follows_captured_nothing_rule() {
        assert!(FieldValue::Text(String::new()).is_empty());
        assert!(FieldValue::Flag(false).is_empty());
        assert!(FieldValue::Number(0.0).is_empty());
        assert!(!FieldValue::Text("X".into()).is_empty());
        assert!(!FieldValue::Flag(true).is_empty());
        assert!(!FieldValue::Number(0.5).is_empty());
    }

    #[test]
    fn test_number_render_trims_integer_values() {
        assert_eq!(FieldValue::Number(120.0).render(), "120");
        assert_eq!(FieldValue::Number(120.53).render(), "120.53");
    }

    #[test]
    fn test_error_code_wire_names() {
        assert_eq!(serde_json::to_string(&ErrorCode::Vacio).unwrap(), "\"VACIO\"");
        assert_eq!(
            serde_json::to_string(&ErrorCode::FormatoInvalido).unwrap(),
            "\"FORMATO_INVALIDO\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::CoincideLiteralDni).unwrap(),
            "\"COINCIDE_LITERAL_DNI\""
        );
    }

    #[test]
    fn test_record_serializes_fields_by_key_name() {
        let mut fields = BTreeMap::new();
        fields.insert(
            FieldKey::Departamento,
            FieldResult {
                raw: Some("Lima".into()),
                normalized: Some(FieldValue::Text("LIMA".into())),
                valid: Some(true),
                errors: vec![],
                sources: vec![SpanRef::synthetic("TEST", "Lima")],
            },
        );
        let record = CanonicalRecord {
            input_length: 4,
            fields,
            summary: Summary {
                valid_count: 1,
                ..Summary::default()
            },
            spans: vec![],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["fields"]["DEPARTAMENTO"]["normalized"], "LIMA");
        assert_eq!(json["summary"]["valid_count"], 1);
    }
}
