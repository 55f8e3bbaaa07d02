//! Pipeline orchestration
//!
//! [`Pipeline`] wires the stages together: sanitize, recognize, fuse, build,
//! derive, assemble. One invocation is synchronous and self-contained; the
//! only shared state between invocations is the read-only UBIGEO catalog.

use crate::assemble::assemble;
use crate::build::build_fields;
use crate::derive::apply_derivations;
use crate::error::Result;
use crate::fuse::map_and_fuse;
use crate::recognizer::EntityRecognizer;
use catastro_core::{sanitize, CanonicalRecord};
use catastro_ubigeo::UbigeoCatalog;

/// The extraction pipeline: raw Spanish text in, canonical record out.
///
/// ```
/// use catastro_core::Span;
/// use catastro_pipeline::{Pipeline, StaticSpans};
/// use catastro_ubigeo::UbigeoCatalog;
///
/// let recognizer = StaticSpans::new(vec![Span::new("DNI", "45128890", 25, 33)]);
/// let pipeline = Pipeline::with_catalog(recognizer, UbigeoCatalog::empty());
/// let record = pipeline.process_text("titular con documento 45128890")?;
/// assert_eq!(record.summary.valid_count, 1);
/// # Ok::<(), catastro_pipeline::PipelineError>(())
/// ```
#[derive(Debug)]
pub struct Pipeline<R> {
    recognizer: R,
    catalog: Option<UbigeoCatalog>,
}

impl<R: EntityRecognizer> Pipeline<R> {
    /// Pipeline using the process-wide UBIGEO catalog
    /// ([`catastro_ubigeo::global`]).
    #[must_use]
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            catalog: None,
        }
    }

    /// Pipeline with an explicitly supplied catalog (tests, custom
    /// deployments).
    #[must_use]
    pub fn with_catalog(recognizer: R, catalog: UbigeoCatalog) -> Self {
        Self {
            recognizer,
            catalog: Some(catalog),
        }
    }

    fn catalog(&self) -> &UbigeoCatalog {
        self.catalog.as_ref().unwrap_or_else(|| catastro_ubigeo::global())
    }

    /// Run the full pipeline over one raw text.
    ///
    /// # Errors
    ///
    /// Only the recognizer boundary can fail; every field-level problem is
    /// recorded on the field and the record is still produced.
    pub fn process_text(&self, raw_text: &str) -> Result<CanonicalRecord> {
        let cleaned = sanitize(raw_text);
        let spans = self.recognizer.recognize(&cleaned)?;
        log::debug!("recognized {} spans over {} chars", spans.len(), cleaned.chars().count());

        let (by_field, by_label) = map_and_fuse(&spans);
        log::debug!(
            "{} labels fused into {} fields",
            by_label.len(),
            by_field.len()
        );

        let mut fields = build_fields(&by_field);
        apply_derivations(&mut fields, &cleaned, self.catalog());
        Ok(assemble(&cleaned, &spans, fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::{NoRecognizer, StaticSpans};
    use catastro_core::{FieldKey, FieldValue, Span};

    #[test]
    fn test_degraded_mode_still_produces_a_record() {
        let pipeline = Pipeline::with_catalog(NoRecognizer, UbigeoCatalog::empty());
        let record = pipeline.process_text("predio sin entidades reconocidas").unwrap();
        assert!(record.fields.is_empty());
        assert!(record.spans.is_empty());
        assert_eq!(record.summary, Default::default());
    }

    #[test]
    fn test_full_text_inference_works_without_spans() {
        let pipeline = Pipeline::with_catalog(NoRecognizer, UbigeoCatalog::empty());
        let record = pipeline
            .process_text("código único 010203040506 sin otros datos")
            .unwrap();
        let fr = &record.fields[&FieldKey::CodigoUnicoCatastral];
        assert_eq!(fr.normalized, Some(FieldValue::Text("010203040506".into())));
        assert_eq!(record.summary.valid_count, 1);
    }

    #[test]
    fn test_sanitized_text_is_what_gets_measured() {
        let pipeline = Pipeline::with_catalog(
            StaticSpans::new(vec![Span::new("LOTE", "5", 0, 1)]),
            UbigeoCatalog::empty(),
        );
        let record = pipeline.process_text("  lote   5  ").unwrap();
        assert_eq!(record.input_length, "lote 5".chars().count());
    }
}
