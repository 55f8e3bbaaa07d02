//! Label mapping and span fusion
//!
//! Recognizer labels map many-to-one onto canonical field keys; when several
//! spans land on the same field, candidate order decides which one supplies
//! the raw value. The policy is purely positional: longer trimmed text first,
//! then earlier start offset. No semantic scoring - a longer span almost
//! always carries the more complete dictation of the same value.

use catastro_core::{FieldKey, Span};
use std::collections::BTreeMap;

/// Group spans by canonical field and by raw label.
///
/// The by-label map keeps every span regardless of mapping, for audit. The
/// by-field map holds only mappable spans, each list sorted by descending
/// trimmed-text length then ascending start offset; the head of each list is
/// the field's best candidate. The sort is stable, so equal candidates keep
/// their input order.
#[must_use]
pub fn map_and_fuse(
    spans: &[Span],
) -> (BTreeMap<FieldKey, Vec<Span>>, BTreeMap<String, Vec<Span>>) {
    let mut by_field: BTreeMap<FieldKey, Vec<Span>> = BTreeMap::new();
    let mut by_label: BTreeMap<String, Vec<Span>> = BTreeMap::new();

    for span in spans {
        by_label
            .entry(span.label.clone())
            .or_default()
            .push(span.clone());
        if let Some(key) = FieldKey::from_label(&span.label) {
            by_field.entry(key).or_default().push(span.clone());
        }
    }

    for candidates in by_field.values_mut() {
        candidates.sort_by_key(|s| (std::cmp::Reverse(s.text.trim().chars().count()), s.start));
    }

    (by_field, by_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonym_labels_fuse_into_one_field() {
        let spans = vec![
            Span::new("UBIGEO_DEPARTAMENTO", "Lima", 0, 4),
            Span::new("DEPARTAMENTO_NOMBRE", "Lima Metropolitana", 20, 38),
        ];
        let (by_field, by_label) = map_and_fuse(&spans);
        assert_eq!(by_field[&FieldKey::Departamento].len(), 2);
        assert_eq!(by_label.len(), 2);
    }

    #[test]
    fn test_longer_span_wins_regardless_of_input_order() {
        let short = Span::new("LOTE", "5", 40, 41);
        let long = Span::new("LOTE", "lote 15", 10, 17);
        for spans in [vec![short.clone(), long.clone()], vec![long.clone(), short.clone()]] {
            let (by_field, _) = map_and_fuse(&spans);
            assert_eq!(by_field[&FieldKey::Lote][0].text, "lote 15");
        }
    }

    #[test]
    fn test_equal_length_prefers_earlier_start() {
        let later = Span::new("SECTOR", "35", 50, 52);
        let earlier = Span::new("SECTOR", "17", 5, 7);
        let (by_field, _) = map_and_fuse(&[later, earlier]);
        assert_eq!(by_field[&FieldKey::Sector][0].text, "17");
    }

    #[test]
    fn test_length_is_measured_on_trimmed_text() {
        let padded = Span::new("MANZANA", "  B  ", 0, 5);
        let plain = Span::new("MANZANA", "B4", 10, 12);
        let (by_field, _) = map_and_fuse(&[padded, plain]);
        assert_eq!(by_field[&FieldKey::Manzana][0].text, "B4");
    }

    #[test]
    fn test_unmapped_labels_stay_in_audit_map_only() {
        let spans = vec![Span::new("PERSONA", "Juan", 0, 4)];
        let (by_field, by_label) = map_and_fuse(&spans);
        assert!(by_field.is_empty());
        assert_eq!(by_label["PERSONA"].len(), 1);
    }
}
