//! UBIGEO catalog loading and lookup
//!
//! The catalog is a tabular resource (CSV or XLSX) with a region, province,
//! district and 6-digit UBIGEO code column. Header names vary between
//! published editions, so each column is matched case-insensitively against a
//! small synonym set. Rows missing any of the four values, or whose code is
//! not exactly 6 digits after digit extraction, are silently skipped - a
//! half-usable catalog is still a usable catalog.

use crate::error::{Result, UbigeoError};
use calamine::{open_workbook_auto, Reader};
use catastro_core::{digits_only, normalize_place};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

/// Accepted header spellings per column, in match priority order.
const REGION_HEADERS: [&str; 4] = ["DEPARTAMENTO", "DPTO", "DEPA", "DEPART"];
const PROVINCE_HEADERS: [&str; 2] = ["PROVINCIA", "PROV"];
const DISTRICT_HEADERS: [&str; 2] = ["DISTRITO", "DIST"];
const CODE_HEADERS: [&str; 3] = ["UBIGEO", "COD_UBIGEO", "UBI"];

/// Lookup table from normalized (region, province, district) triples to the
/// 6-digit UBIGEO code. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UbigeoCatalog {
    entries: BTreeMap<String, String>,
}

/// Resolved column indices of the four required catalog columns.
#[derive(Debug, Clone, Copy)]
struct Columns {
    region: usize,
    province: usize,
    district: usize,
    code: usize,
}

fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    for candidate in candidates {
        let hit = headers.iter().position(|h| {
            h.trim().trim_start_matches('\u{feff}').to_uppercase() == *candidate
        });
        if hit.is_some() {
            return hit;
        }
    }
    None
}

fn detect_columns(headers: &[String]) -> Option<Columns> {
    Some(Columns {
        region: find_column(headers, &REGION_HEADERS)?,
        province: find_column(headers, &PROVINCE_HEADERS)?,
        district: find_column(headers, &DISTRICT_HEADERS)?,
        code: find_column(headers, &CODE_HEADERS)?,
    })
}

fn key_of(region: &str, province: &str, district: &str) -> String {
    format!("{region}|{province}|{district}")
}

impl UbigeoCatalog {
    /// An empty catalog; every lookup misses.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from in-memory rows, applying the same normalization
    /// and skip rules as the file loaders. Mainly for tests and fixtures.
    #[must_use]
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = (&'a str, &'a str, &'a str, &'a str)>) -> Self {
        let mut catalog = Self::default();
        for (region, province, district, code) in rows {
            catalog.insert_row(region, province, district, code);
        }
        catalog
    }

    /// Load a catalog file, dispatching on extension: `.xlsx`/`.xls` to the
    /// spreadsheet loader, everything else to the CSV loader.
    ///
    /// Undetectable headers yield an empty catalog, not an error; only I/O
    /// and parse failures error.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let is_spreadsheet = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "xlsx" | "xls"));
        let catalog = if is_spreadsheet {
            Self::load_xlsx(path)?
        } else {
            Self::load_csv(path)?
        };
        log::info!(
            "loaded UBIGEO catalog from {}: {} entries",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    fn load_csv(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| UbigeoError::io(path, e))?;
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();
        let Some(columns) = detect_columns(&headers) else {
            log::warn!("no usable headers in {}", path.display());
            return Ok(Self::empty());
        };
        let mut catalog = Self::default();
        for record in reader.records() {
            let record = record?;
            catalog.insert_row(
                record.get(columns.region).unwrap_or(""),
                record.get(columns.province).unwrap_or(""),
                record.get(columns.district).unwrap_or(""),
                record.get(columns.code).unwrap_or(""),
            );
        }
        Ok(catalog)
    }

    fn load_xlsx(path: &Path) -> Result<Self> {
        let mut workbook = open_workbook_auto(path)?;
        let Some(range) = workbook.worksheet_range_at(0) else {
            return Ok(Self::empty());
        };
        let range = range?;
        let mut rows = range.rows();
        let Some(header_row) = rows.next() else {
            return Ok(Self::empty());
        };
        let headers: Vec<String> = header_row.iter().map(|c| c.to_string()).collect();
        let Some(columns) = detect_columns(&headers) else {
            log::warn!("no usable headers in {}", path.display());
            return Ok(Self::empty());
        };
        let mut catalog = Self::default();
        for row in rows {
            let cell = |idx: usize| row.get(idx).map(ToString::to_string).unwrap_or_default();
            catalog.insert_row(
                &cell(columns.region),
                &cell(columns.province),
                &cell(columns.district),
                &cell(columns.code),
            );
        }
        Ok(catalog)
    }

    fn insert_row(&mut self, region: &str, province: &str, district: &str, code: &str) {
        let region = normalize_place(region);
        let province = normalize_place(province);
        let district = normalize_place(district);
        let code = digits_only(code);
        if region.is_empty() || province.is_empty() || district.is_empty() || code.len() != 6 {
            return;
        }
        self.entries.insert(key_of(&region, &province, &district), code);
    }

    /// Look up the UBIGEO code of a (region, province, district) triple.
    /// Arguments are normalized the same way catalog rows were, so accented
    /// or mixed-case input matches.
    #[must_use]
    pub fn lookup(&self, region: &str, province: &str, district: &str) -> Option<&str> {
        let key = key_of(
            &normalize_place(region),
            &normalize_place(province),
            &normalize_place(district),
        );
        self.entries.get(&key).map(String::as_str)
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_loads_csv_with_canonical_headers() {
        let file = write_csv(
            "DEPARTAMENTO,PROVINCIA,DISTRITO,UBIGEO\n\
             LIMA,LIMA,MIRAFLORES,150122\n\
             LIMA,LIMA,SAN ISIDRO,150131\n",
        );
        let catalog = UbigeoCatalog::load_from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("LIMA", "LIMA", "MIRAFLORES"), Some("150122"));
    }

    #[test]
    fn test_header_synonyms_and_case() {
        let file = write_csv("dpto,prov,dist,cod_ubigeo\nLIMA,LIMA,MIRAFLORES,150122\n");
        let catalog = UbigeoCatalog::load_from_path(file.path()).unwrap();
        assert_eq!(catalog.lookup("LIMA", "LIMA", "MIRAFLORES"), Some("150122"));
    }

    #[test]
    fn test_bom_on_first_header_is_tolerated() {
        let file = write_csv("\u{feff}DEPARTAMENTO,PROVINCIA,DISTRITO,UBIGEO\nLIMA,LIMA,ATE,150103\n");
        let catalog = UbigeoCatalog::load_from_path(file.path()).unwrap();
        assert_eq!(catalog.lookup("LIMA", "LIMA", "ATE"), Some("150103"));
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let file = write_csv(
            "DEPARTAMENTO,PROVINCIA,DISTRITO,UBIGEO\n\
             LIMA,LIMA,MIRAFLORES,150122\n\
             LIMA,,SURCO,150140\n\
             LIMA,LIMA,SURQUILLO,1501\n\
             LIMA,LIMA,BARRANCO\n",
        );
        let catalog = UbigeoCatalog::load_from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_undetectable_headers_yield_empty_catalog() {
        let file = write_csv("a,b,c,d\n1,2,3,150122\n");
        let catalog = UbigeoCatalog::load_from_path(file.path()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_lookup_normalizes_accents_and_case() {
        let catalog = UbigeoCatalog::from_rows([("ÁNCASH", "HUARAZ", "INDEPENDENCIA", "020105")]);
        assert_eq!(
            catalog.lookup("Áncash", " huaraz ", "independencia"),
            Some("020105")
        );
        assert_eq!(catalog.lookup("ANCASH", "HUARAZ", "INDEPENDENCIA"), Some("020105"));
    }

    #[test]
    fn test_code_cells_are_digit_extracted() {
        let catalog = UbigeoCatalog::from_rows([("LIMA", "LIMA", "ATE", " 150103 ")]);
        assert_eq!(catalog.lookup("LIMA", "LIMA", "ATE"), Some("150103"));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = UbigeoCatalog::load_from_path("no-such-ubigeo.csv").unwrap_err();
        assert!(matches!(err, UbigeoError::Io { .. }));
    }
}
