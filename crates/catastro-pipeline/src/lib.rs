//! # catastro-pipeline
//!
//! The extraction pipeline for catastro-rs: from noisy Spanish survey text
//! plus entity-recognition spans to the validated canonical record.
//!
//! ```text
//! raw text ──▶ sanitize ──▶ recognizer (external) ──▶ spans
//!                                                       │
//!                                  map & fuse ◀─────────┘
//!                                       │
//!                 build fields (normalize + validate, per field)
//!                                       │
//!          derive (UBIGEO lookup · MES/ANIO fusion · CUC repair)
//!                                       │
//!                               assemble record
//! ```
//!
//! Stages are deterministic: identical sanitized text and identical
//! recognizer output always yield an identical record. Recognition is an
//! external capability behind [`EntityRecognizer`]; the shipped
//! implementations wrap pre-computed span lists ([`StaticSpans`]) or run
//! without one ([`NoRecognizer`], degraded mode).
//!
//! ## Example
//!
//! ```
//! use catastro_core::{FieldKey, Span};
//! use catastro_pipeline::{Pipeline, StaticSpans};
//! use catastro_ubigeo::UbigeoCatalog;
//!
//! let spans = vec![
//!     Span::new("UBIGEO_DEPARTAMENTO", "Lima", 18, 22),
//!     Span::new("UBIGEO_PROVINCIA", "Lima", 24, 28),
//!     Span::new("UBIGEO_DISTRITO", "Miraflores", 39, 49),
//! ];
//! let catalog = UbigeoCatalog::from_rows([("LIMA", "LIMA", "MIRAFLORES", "150122")]);
//! let pipeline = Pipeline::with_catalog(StaticSpans::new(spans), catalog);
//!
//! let record = pipeline.process_text("predio ubicado en Lima, Lima, distrito Miraflores")?;
//! assert!(record.fields.contains_key(&FieldKey::Ubigeo));
//! # Ok::<(), catastro_pipeline::PipelineError>(())
//! ```

pub mod assemble;
pub mod build;
pub mod derive;
pub mod error;
pub mod fuse;
pub mod pipeline;
pub mod recognizer;

pub use assemble::assemble;
pub use build::build_fields;
pub use derive::apply_derivations;
pub use error::{PipelineError, Result};
pub use fuse::map_and_fuse;
pub use pipeline::Pipeline;
pub use recognizer::{EntityRecognizer, NoRecognizer, StaticSpans};
