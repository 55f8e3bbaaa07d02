//! Text sanitation and Spanish text helpers
//!
//! [`sanitize`] is the light denoising pass applied to raw transcript text
//! before entity recognition: digit runs broken by transcription pauses are
//! rejoined, a fixed table of known ASR mis-hearings is repaired, and
//! whitespace is collapsed. Diacritics are preserved - the recognizer
//! performs better on the original accents.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Known ASR mis-transcriptions, repaired whole-word and case-insensitively.
static MISHEARINGS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\bso[vb]i[cq]uado\b", "ubicado"),
        (r"(?i)\bhablicaci[oó]n\b", "habilitacion"),
        (r"(?i)\bproe?dial\b", "predial"),
        (r"(?i)\brantas\b", "rentas"),
    ]
    .into_iter()
    .map(|(pattern, fix)| (Regex::new(pattern).expect("static pattern"), fix))
    .collect()
});

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Denoise raw transcript text. Deterministic and total.
///
/// Applied in order: digit-run rejoining, mis-hearing repairs, whitespace
/// collapse + trim.
///
/// ```
/// use catastro_core::sanitize;
///
/// assert_eq!(
///     sanitize("código  15, 000, 23 soviquado en Lima"),
///     "código 1500023 ubicado en Lima"
/// );
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let mut s = collapse_split_digits(raw);
    for (pattern, fix) in MISHEARINGS.iter() {
        s = pattern.replace_all(&s, *fix).into_owned();
    }
    WHITESPACE_RUN.replace_all(&s, " ").trim().to_string()
}

/// Rejoin digit runs interrupted by whitespace/comma separators:
/// `"15, 000, 23"` becomes `"1500023"`. Only separators with a digit on both
/// sides are removed; everything else passes through untouched.
fn collapse_split_digits(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if (c.is_whitespace() || c == ',') && out.ends_with(|p: char| p.is_ascii_digit()) {
            let mut j = i;
            while j < chars.len() && (chars[j].is_whitespace() || chars[j] == ',') {
                j += 1;
            }
            if j < chars.len() && chars[j].is_ascii_digit() {
                i = j;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }
    out
}

/// Remove diacritics: NFD-decompose, drop combining marks.
#[must_use]
pub fn strip_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Collapse whitespace, trim, uppercase.
#[must_use]
pub fn normalize_upper(s: &str) -> String {
    WHITESPACE_RUN
        .replace_all(s, " ")
        .trim()
        .to_uppercase()
}

/// Catalog-key normalization for place names: uppercased, accent-stripped,
/// single-spaced. The same function keys the UBIGEO catalog on both the load
/// and lookup sides.
#[must_use]
pub fn normalize_place(s: &str) -> String {
    let upper = normalize_upper(s);
    let stripped = strip_accents(&upper);
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

/// Title-case for proper names: the first letter after any non-alphabetic
/// character is uppercased, the rest lowercased (`"maría-luisa"` ->
/// `"María-Luisa"`).
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_digit_runs_split_by_pauses() {
        assert_eq!(sanitize("15, 000, 23"), "1500023");
        assert_eq!(sanitize("código 12 34 56 78 90 11"), "código 123456789011");
    }

    #[test]
    fn test_non_digit_separators_untouched() {
        assert_eq!(sanitize("lote 5, manzana B"), "lote 5, manzana B");
        assert_eq!(sanitize("uno, dos, tres"), "uno, dos, tres");
    }

    #[test]
    fn test_repairs_known_mishearings() {
        assert_eq!(sanitize("predio soviquado en Lima"), "predio ubicado en Lima");
        assert_eq!(sanitize("Sovicado cerca"), "ubicado cerca");
        assert_eq!(sanitize("hablicación urbana"), "habilitacion urbana");
        assert_eq!(sanitize("código proedial y rantas"), "código predial y rentas");
    }

    #[test]
    fn test_whole_word_only() {
        // Embedded occurrences are not words and must survive.
        assert_eq!(sanitize("rantasx"), "rantasx");
    }

    #[test]
    fn test_preserves_diacritics() {
        assert_eq!(sanitize("  San  Martín   de Porres "), "San Martín de Porres");
    }

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("Áncash añejo"), "Ancash anejo");
        assert_eq!(strip_accents("MARAÑÓN"), "MARANON");
    }

    #[test]
    fn test_normalize_place_is_catalog_key_form() {
        assert_eq!(normalize_place("  san martín  "), "SAN MARTIN");
        assert_eq!(normalize_place("Áncash"), "ANCASH");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("juan carlos"), "Juan Carlos");
        assert_eq!(title_case("maría-luisa"), "María-Luisa");
        assert_eq!(title_case("AVENIDA LOS PRÓCERES"), "Avenida Los Próceres");
    }

    #[test]
    fn test_sanitize_is_total_on_empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   \t "), "");
    }
}
