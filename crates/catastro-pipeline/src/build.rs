//! Primary field construction
//!
//! Turns each field's fused candidate list into a [`FieldResult`]: the best
//! candidate supplies the raw text, the field's normalizer and validator do
//! the rest, and every candidate is kept as provenance.

use catastro_core::{normalize, validate, FieldKey, FieldResult, Span, SpanRef};
use std::collections::BTreeMap;

/// Build the primary field results from fused candidates.
///
/// The head of each candidate list (already sorted by the fuser) supplies
/// the raw value; the remaining candidates are recorded as additional
/// sources. Validation outcomes land on the field; nothing here fails.
#[must_use]
pub fn build_fields(by_field: &BTreeMap<FieldKey, Vec<Span>>) -> BTreeMap<FieldKey, FieldResult> {
    let mut fields = BTreeMap::new();
    for (&key, candidates) in by_field {
        let Some(best) = candidates.first() else {
            continue;
        };
        let raw = best.text.trim().to_string();
        let normalized = normalize(key, &raw);
        let (valid, error) = validate(key, normalized.as_ref());
        fields.insert(
            key,
            FieldResult {
                raw: Some(raw),
                normalized,
                valid: Some(valid),
                errors: error.into_iter().collect(),
                sources: candidates.iter().map(SpanRef::from_span).collect(),
            },
        );
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use catastro_core::{ErrorCode, FieldValue};

    fn fused(spans: Vec<Span>) -> BTreeMap<FieldKey, Vec<Span>> {
        crate::fuse::map_and_fuse(&spans).0
    }

    #[test]
    fn test_best_candidate_supplies_raw_and_all_become_sources() {
        let fields = build_fields(&fused(vec![
            Span::new("DNI", "45128890", 10, 18),
            Span::new("DNI", "4512", 30, 34),
        ]));
        let fr = &fields[&FieldKey::NumeroDocumento];
        assert_eq!(fr.raw.as_deref(), Some("45128890"));
        assert_eq!(fr.normalized, Some(FieldValue::Text("45128890".into())));
        assert_eq!(fr.valid, Some(true));
        assert!(fr.errors.is_empty());
        assert_eq!(fr.sources.len(), 2);
        assert_eq!(fr.sources[0].start, Some(10));
    }

    #[test]
    fn test_invalid_value_keeps_the_field_with_its_error() {
        let fields = build_fields(&fused(vec![Span::new("TELEFONO", "12345", 0, 5)]));
        let fr = &fields[&FieldKey::Telefono];
        assert_eq!(fr.valid, Some(false));
        assert_eq!(fr.errors, vec![ErrorCode::FormatoInvalido]);
    }

    #[test]
    fn test_unnormalizable_value_is_vacio() {
        let fields = build_fields(&fused(vec![Span::new("MEDIDA_FRENTE", "sin medida", 0, 10)]));
        let fr = &fields[&FieldKey::MedidaFrente];
        assert_eq!(fr.normalized, None);
        assert_eq!(fr.errors, vec![ErrorCode::Vacio]);
    }

    #[test]
    fn test_zonificacion_dni_literal_is_rejected() {
        let fields = build_fields(&fused(vec![Span::new("ZONIFICACION", "DNI", 0, 3)]));
        let fr = &fields[&FieldKey::Zonificacion];
        assert_eq!(fr.valid, Some(false));
        assert_eq!(fr.errors, vec![ErrorCode::CoincideLiteralDni]);
    }
}
