//! Spanish free-text date parsing
//!
//! Survey dates arrive as dictated Spanish ("quince de junio del dos mil
//! quince" has usually been rendered by the ASR as "15 de junio del 2015"),
//! as terse "junio 2015", or as a bare year. [`parse_fecha_es`] resolves the
//! four accepted shapes in strict priority order; the ordered rule list is a
//! visible data structure, not scattered branches, so the priority is
//! testable.

use crate::text::strip_accents;
use once_cell::sync::Lazy;
use regex::Regex;

/// Spanish month names, including the "setiembre" spelling used in Peru.
/// Matched after accent-stripping and lowercasing.
const MONTHS_ES: [(&str, &str); 13] = [
    ("enero", "01"),
    ("febrero", "02"),
    ("marzo", "03"),
    ("abril", "04"),
    ("mayo", "05"),
    ("junio", "06"),
    ("julio", "07"),
    ("agosto", "08"),
    ("septiembre", "09"),
    ("setiembre", "09"),
    ("octubre", "10"),
    ("noviembre", "11"),
    ("diciembre", "12"),
];

fn month_number(name: &str) -> Option<&'static str> {
    let folded = strip_accents(&name.to_lowercase());
    MONTHS_ES
        .iter()
        .find(|(month, _)| *month == folded)
        .map(|(_, number)| *number)
}

/// The date shapes, tried in order; the first whose month resolves wins.
static DAY_MONTH_YEAR_PREP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2})\s+de\s+([a-záéíóú]+)\s+(?:de\s+|del\s+)?(\d{4})").expect("static pattern")
});
static DAY_MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\s+([a-záéíóú]+)\s+(\d{4})").expect("static pattern"));
static MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-záéíóú]+)\s+(?:de\s+|del\s+)?(\d{4})").expect("static pattern"));
static BARE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("static pattern"));

static PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,.]").expect("static pattern"));
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Parse a dictated Spanish date into `YYYY-MM-DD`.
///
/// Shapes, in priority order (first match wins):
///
/// 1. `15 de junio del 2015` -> `2015-06-15`
/// 2. `15 junio 2015` -> `2015-06-15`
/// 3. `junio del 2015` -> `2015-06-01` (day defaults to the 1st)
/// 4. a year `1900..=2099` anywhere -> `2015-01-01`
///
/// When no shape matches, the input's digit characters are returned
/// concatenated, or `None` when there are none. Total: never panics on
/// adversarial input.
///
/// ```
/// use catastro_core::parse_fecha_es;
///
/// assert_eq!(parse_fecha_es("15 de junio del 2015").as_deref(), Some("2015-06-15"));
/// assert_eq!(parse_fecha_es("junio 2015").as_deref(), Some("2015-06-01"));
/// assert_eq!(parse_fecha_es("2015").as_deref(), Some("2015-01-01"));
/// assert_eq!(parse_fecha_es("sin fecha"), None);
/// ```
#[must_use]
pub fn parse_fecha_es(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        return None;
    }
    let t = s.trim().to_lowercase();
    let t = PUNCT.replace_all(&t, " ");
    let t = SPACES.replace_all(&t, " ");

    for shape in [&DAY_MONTH_YEAR_PREP, &DAY_MONTH_YEAR] {
        if let Some(caps) = shape.captures(&t) {
            if let Some(month) = month_number(&caps[2]) {
                let day: u32 = caps[1].parse().ok()?;
                return Some(format!("{}-{}-{:02}", &caps[3], month, day));
            }
        }
    }
    if let Some(caps) = MONTH_YEAR.captures(&t) {
        if let Some(month) = month_number(&caps[1]) {
            return Some(format!("{}-{}-01", &caps[2], month));
        }
    }
    if let Some(year) = BARE_YEAR.find(&t) {
        return Some(format!("{}-01-01", year.as_str()));
    }

    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}
