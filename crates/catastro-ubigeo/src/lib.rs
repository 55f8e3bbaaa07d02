//! # catastro-ubigeo
//!
//! UBIGEO geographic catalog for catastro-rs: the lookup table from
//! (departamento, provincia, distrito) triples to the 6-digit UBIGEO code
//! used to derive a record's geographic code when the recognizer did not
//! produce one directly.
//!
//! Catalog files are published as CSV or XLSX with inconsistent header
//! spellings; [`UbigeoCatalog::load_from_path`] accepts both formats and a
//! synonym set per column. Keys are normalized (uppercased, accent-stripped,
//! single-spaced) on both the load and lookup sides, so `"Áncash"` and
//! `"ANCASH"` meet in the middle.
//!
//! ## Process-wide catalog
//!
//! [`global`] loads the catalog at most once per process, from
//! `$UBIGEO_PATH` or `ubigeo.xlsx`/`ubigeo.csv` in the working directory.
//! The once cell guarantees no reader ever observes a partially populated
//! table; a missing or unusable file degrades to an empty catalog and every
//! catalog-dependent derivation becomes a no-op.
//!
//! ```no_run
//! let catalog = catastro_ubigeo::global();
//! if let Some(code) = catalog.lookup("LIMA", "LIMA", "MIRAFLORES") {
//!     println!("ubigeo: {code}");
//! }
//! ```

pub mod catalog;
pub mod error;

pub use catalog::UbigeoCatalog;
pub use error::{Result, UbigeoError};

use once_cell::sync::OnceCell;
use std::path::PathBuf;

static GLOBAL: OnceCell<UbigeoCatalog> = OnceCell::new();

/// Environment variable overriding the catalog location.
pub const UBIGEO_PATH_VAR: &str = "UBIGEO_PATH";

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(path) = std::env::var(UBIGEO_PATH_VAR) {
        if !path.is_empty() {
            paths.push(PathBuf::from(path));
        }
    }
    paths.push(PathBuf::from("ubigeo.xlsx"));
    paths.push(PathBuf::from("ubigeo.csv"));
    paths
}

/// The process-wide catalog, loaded on first access.
///
/// Load failures are logged and swallowed: callers always get a usable
/// (possibly empty) catalog, never an error and never a partial table.
#[must_use]
pub fn global() -> &'static UbigeoCatalog {
    GLOBAL.get_or_init(|| {
        for path in candidate_paths() {
            if !path.exists() {
                continue;
            }
            match UbigeoCatalog::load_from_path(&path) {
                Ok(catalog) if !catalog.is_empty() => return catalog,
                Ok(_) => log::warn!("catalog {} has no usable rows", path.display()),
                Err(e) => log::warn!("catalog {} failed to load: {e}", path.display()),
            }
        }
        log::info!("no UBIGEO catalog found; geographic inference disabled");
        UbigeoCatalog::empty()
    })
}
