//! Error types for catalog loading

use std::path::PathBuf;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, UbigeoError>;

/// Errors surfaced by explicit catalog loads.
///
/// Only [`UbigeoCatalog::load_from_path`](crate::UbigeoCatalog::load_from_path)
/// reports these; the lazy process-wide catalog swallows them into an empty
/// catalog so extraction keeps running in degraded mode.
#[derive(Debug, thiserror::Error)]
pub enum UbigeoError {
    /// Catalog file could not be read
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// CSV catalog could not be parsed
    #[error("CSV catalog error: {0}")]
    Csv(#[from] csv::Error),

    /// XLSX catalog could not be opened or read
    #[error("XLSX catalog error: {0}")]
    Xlsx(#[from] calamine::Error),
}

impl UbigeoError {
    /// Create an I/O error
    #[inline]
    #[must_use = "creates an I/O error that should be returned or handled"]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
