//! Digit extraction and the catastral-code extractor
//!
//! Dictated identifiers arrive embedded in prose ("sector 35", "DNI 45 12 88
//! 90"). These helpers pull the digit content out. [`extract_cuc`] is the
//! 12-digit unique catastral code extractor with its three-stage priority:
//! an isolated 12-digit run, the six dictated 2-digit pairs after the phrase
//! naming the code, and finally the first 12 digits anywhere in the text.
//!
//! The digit-first and first-12-digits fallbacks are deliberate heuristics:
//! on adversarial input they can surface a plausible-looking but wrong value
//! (an address number bleeding into a code). That trade-off is part of the
//! extraction contract; see the crate tests that pin it down.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("static pattern"));
static ISOLATED_CUC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{12}\b").expect("static pattern"));

/// Six dictated 2-digit pairs following the phrase that names the code.
/// Tolerates the accented spelling and the frequent "umico" mis-hearing.
static CUC_PAIRS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:c[oó]digo\s+[uú][nm]ico\s+catastral|cuc).*?((?:\d{2}[\s,]+){5}\d{2})")
        .expect("static pattern")
});

/// Keep only ASCII digits.
#[must_use]
pub fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Keep only ASCII digits, truncated to `cap` digits.
#[must_use]
pub fn digits_capped(s: &str, cap: usize) -> String {
    s.chars().filter(char::is_ascii_digit).take(cap).collect()
}

/// First digit run if the text has one, otherwise the trimmed text.
///
/// `"sector 35"` -> `"35"`; `"B"` -> `"B"`. Returns `None` for blank input.
#[must_use]
pub fn digits_first(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        return None;
    }
    match DIGIT_RUN.find(s) {
        Some(run) => Some(run.as_str().to_string()),
        None => Some(s.trim().to_string()),
    }
}

/// Extract a 12-digit catastral code from free text.
///
/// Priority order, first hit wins:
///
/// 1. an isolated run of exactly 12 digits;
/// 2. after "código único catastral" (or "cuc"), six 2-digit groups
///    separated by whitespace/commas, concatenated;
/// 3. when the text holds at least 12 digit characters anywhere, the first
///    12 in order of appearance.
///
/// Returns `None` when fewer than 12 digits exist in the text.
#[must_use]
pub fn extract_cuc(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    if let Some(run) = ISOLATED_CUC.find(text) {
        return Some(run.as_str().to_string());
    }
    if let Some(caps) = CUC_PAIRS.captures(text) {
        let seq = digits_only(&caps[1]);
        if seq.len() == 12 {
            return Some(seq);
        }
    }
    let all = digits_only(text);
    if all.len() >= 12 {
        return Some(all[..12].to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("DNI 45-12.88 90"), "45128890");
        assert_eq!(digits_only("sin números"), "");
    }

    #[test]
    fn test_digits_capped() {
        assert_eq!(digits_capped("RUC 20-1234567891234", 11), "20123456789");
    }

    #[test]
    fn test_digits_first_prefers_the_run() {
        assert_eq!(digits_first("sector 35").as_deref(), Some("35"));
        assert_eq!(digits_first("35 bis").as_deref(), Some("35"));
    }

    #[test]
    fn test_digits_first_keeps_text_without_digits() {
        assert_eq!(digits_first(" manzana B ").as_deref(), Some("manzana B"));
        assert_eq!(digits_first(""), None);
        assert_eq!(digits_first("   "), None);
    }

    #[test]
    fn test_isolated_twelve_digit_run_wins() {
        assert_eq!(
            extract_cuc("el código es 010203040506 del predio").as_deref(),
            Some("010203040506")
        );
    }

    #[test]
    fn test_thirteen_digit_run_is_not_isolated() {
        // 13 contiguous digits fail the isolated check; the first-12 fallback
        // then takes the leading 12.
        assert_eq!(
            extract_cuc("serie 0102030405067").as_deref(),
            Some("010203040506")
        );
    }

    #[test]
    fn test_dictated_pairs_after_the_phrase() {
        assert_eq!(
            extract_cuc("código único catastral 01, 02, 03, 04, 05, 06").as_deref(),
            Some("010203040506")
        );
        assert_eq!(
            extract_cuc("cuc 01 02 03 04 05 06").as_deref(),
            Some("010203040506")
        );
        // the "umico" mis-hearing
        assert_eq!(
            extract_cuc("codigo umico catastral 01 02 03 04 05 06").as_deref(),
            Some("010203040506")
        );
    }

    #[test]
    fn test_first_twelve_digits_anywhere() {
        assert_eq!(
            extract_cuc("sector 12 manzana 34 lote 56 piso 78 unidad 90 dc 11 extra 99").as_deref(),
            Some("123456789011")
        );
    }

    #[test]
    fn test_fewer_than_twelve_digits_is_none() {
        assert_eq!(extract_cuc("lote 12 manzana 34"), None);
        assert_eq!(extract_cuc(""), None);
        assert_eq!(extract_cuc("sin dígitos"), None);
    }

    #[test]
    fn test_fallback_can_bleed_across_fields() {
        // Known heuristic limit: unrelated numbers are swept up in order of
        // appearance when no isolated code or dictated pair group exists.
        assert_eq!(
            extract_cuc("av. Arenales 1234, DNI 45128890").as_deref(),
            Some("123445128890")
        );
    }
}
