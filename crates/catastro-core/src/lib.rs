//! # catastro-core
//!
//! Field model, text normalization and structural validation for the
//! Peruvian cadastral survey form ("ficha catastral").
//!
//! The crate turns noisy, transcription-derived Spanish text fragments into
//! canonical field values. It owns everything that is a pure function of the
//! input text:
//!
//! - [`FieldKey`] - the closed set of canonical output fields, plus the
//!   many-to-one recognizer-label mapping ([`FieldKey::from_label`])
//! - [`sanitize`] - light denoising applied before entity recognition
//! - [`normalize`] - per-field raw-text -> canonical-value functions
//! - [`validate`] - per-field structural acceptance rules
//! - [`parse_fecha_es`] / [`extract_cuc`] - the Spanish free-text date
//!   parser and the 12-digit catastral code extractor
//!
//! Span fusion, cross-field derivation and record assembly live in
//! `catastro-pipeline`; the UBIGEO geographic catalog lives in
//! `catastro-ubigeo`.
//!
//! ## Example
//!
//! ```
//! use catastro_core::{normalize, validate, FieldKey, FieldValue};
//!
//! let value = normalize(FieldKey::NumeroDocumento, "DNI 4512 8890");
//! assert_eq!(value, Some(FieldValue::Text("45128890".into())));
//!
//! let (valid, error) = validate(FieldKey::NumeroDocumento, value.as_ref());
//! assert!(valid);
//! assert!(error.is_none());
//! ```
//!
//! Every normalizer and validator is total: adversarial input degrades to
//! `None` / invalid, never to a panic or an error return.

pub mod codes;
pub mod dates;
pub mod field;
pub mod normalize;
pub mod record;
pub mod span;
pub mod text;
pub mod validate;

pub use codes::{digits_first, digits_only, extract_cuc};
pub use dates::parse_fecha_es;
pub use field::FieldKey;
pub use normalize::normalize;
pub use record::{CanonicalRecord, ErrorCode, FieldResult, FieldValue, Summary};
pub use span::{Span, SpanRef};
pub use text::{normalize_place, sanitize, strip_accents};
pub use validate::validate;
