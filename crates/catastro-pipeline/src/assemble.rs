//! Record assembly
//!
//! Pure aggregation of the per-field results into the final
//! [`CanonicalRecord`]: nothing is dropped, every field is counted in
//! exactly one summary bucket, and the full span list rides along for audit.

use catastro_core::{CanonicalRecord, FieldKey, FieldResult, Span, SpanRef, Summary};
use std::collections::BTreeMap;

/// Assemble the canonical record.
///
/// A field is empty when its normalized value is absent or renders as
/// nothing captured; emptiness takes precedence over invalidity. The
/// remaining fields split on their validation outcome.
#[must_use]
pub fn assemble(
    text: &str,
    spans: &[Span],
    fields: BTreeMap<FieldKey, FieldResult>,
) -> CanonicalRecord {
    let mut summary = Summary::default();
    for fr in fields.values() {
        let empty = fr.normalized.as_ref().map_or(true, |v| v.is_empty());
        if empty {
            summary.empty_count += 1;
        } else if fr.valid == Some(true) {
            summary.valid_count += 1;
        } else {
            summary.invalid_count += 1;
        }
    }
    CanonicalRecord {
        input_length: text.chars().count(),
        fields,
        summary,
        spans: spans.iter().map(SpanRef::from_span).collect(),
    }
}
