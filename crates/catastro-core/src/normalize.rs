//! Per-field normalization registry
//!
//! [`normalize`] maps a field key and the raw extracted text to the field's
//! canonical value. One pure, total function per family; a key outside every
//! family gets the default treatment (trim, `None` when nothing remains).
//!
//! Families, mirroring the semantics of the physical form:
//!
//! | Family | Fields | Result |
//! |--------|--------|--------|
//! | digits only | identity/contributor/predial/phone/municipal numbers | text |
//! | digits only, capped | RUC (11) | text |
//! | digit-first | sector, manzana, lote, número interior | text |
//! | uppercase | place names, zona, sublote, razón social | text |
//! | title-case | vía/habilitación names, person names | text |
//! | lowercase | e-mail | text |
//! | calendar | fecha de adquisición | ISO text |
//! | date characters | fechas de construcción | text |
//! | decimal | areas and linear measures | number |
//! | affirmative | utility services | flag |
//! | vocabulary | MEP (predominant material) | text |
//! | code extractor | código único catastral | text |

use crate::codes::{digits_capped, digits_first, digits_only, extract_cuc};
use crate::dates::parse_fecha_es;
use crate::field::FieldKey;
use crate::record::FieldValue;
use crate::text::{normalize_upper, title_case};
use once_cell::sync::Lazy;
use regex::Regex;

/// Construction-material vocabulary, in match priority order; first whole-word
/// hit wins. Plural "ladrillos" is accepted.
static MEP_VOCAB: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\bconcreto\b", "CONCRETO"),
        (r"(?i)\bladrillo(s)?\b", "LADRILLO"),
        (r"(?i)\bmadera\b", "MADERA"),
        (r"(?i)\badobe\b", "ADOBE"),
        (r"(?i)\bquincha\b", "QUINCHA"),
    ]
    .into_iter()
    .map(|(pattern, term)| (Regex::new(pattern).expect("static pattern"), term))
    .collect()
});

static DECIMAL_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d.]").expect("static pattern"));
static DATE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9/.-]").expect("static pattern"));

fn text_value(s: String) -> Option<FieldValue> {
    if s.is_empty() {
        None
    } else {
        Some(FieldValue::Text(s))
    }
}

fn decimal_value(raw: &str) -> Option<FieldValue> {
    let kept = DECIMAL_CHARS.replace_all(raw, "");
    kept.parse::<f64>().ok().map(FieldValue::Number)
}

fn affirmative(raw: &str) -> FieldValue {
    let folded = raw.trim().to_uppercase();
    FieldValue::Flag(matches!(folded.as_str(), "1" | "SI" | "SÍ"))
}

fn material_category(raw: &str) -> Option<FieldValue> {
    for (pattern, term) in MEP_VOCAB.iter() {
        if pattern.is_match(raw) {
            return Some(FieldValue::Text((*term).to_string()));
        }
    }
    text_value(normalize_upper(raw))
}

/// Normalize a raw extracted text into the field's canonical value.
///
/// Total: malformed input degrades to `None` (or `false` for the service
/// flags, which treat anything but a clear affirmative as negative), never
/// to a panic.
#[must_use]
pub fn normalize(key: FieldKey, raw: &str) -> Option<FieldValue> {
    use FieldKey as K;
    match key {
        // Identity and numeric codes: digits only.
        K::NumeroDocumento
        | K::Telefono
        | K::CodigoContribuyente
        | K::CodigoPredial
        | K::NumeroMunicipal => text_value(digits_only(raw)),
        K::NumeroRuc => text_value(digits_capped(raw, 11)),

        // The unique catastral code gets the dedicated extractor; when it
        // finds nothing, whatever digits the span holds, capped at 12.
        K::CodigoUnicoCatastral => {
            extract_cuc(raw).map(FieldValue::Text).or_else(|| text_value(digits_capped(raw, 12)))
        }

        // Location numbers are dictated as "sector 35": prefer the digits.
        K::Sector | K::Manzana | K::Lote | K::NumeroInterior => {
            digits_first(raw).and_then(text_value)
        }

        // Official codes and place names in uppercase.
        K::Departamento
        | K::Provincia
        | K::Distrito
        | K::ZonaSectorEtapa
        | K::Sublote
        | K::RazonSocial => text_value(raw.trim().to_uppercase()),

        // Proper names in title case.
        K::NombreVia | K::NombreHabilitacion | K::Nombres | K::ApellidoPaterno | K::ApellidoMaterno => {
            text_value(title_case(raw.trim()))
        }

        K::CorreoElectronico => text_value(raw.trim().to_lowercase()),

        // Acquisition date parses to ISO; construction dates keep their date
        // characters as dictated (the derivation engine fuses MES/ANIO spans
        // into an ISO date when the model split them).
        K::FechaAdquisicion => parse_fecha_es(raw).map(FieldValue::Text),
        K::FechaConstruccion | K::ObraFechaConstruccion => {
            text_value(DATE_CHARS.replace_all(raw, "").into_owned())
        }

        // Areas and linear measures become quantities.
        K::AreaTerrenoAdquirida
        | K::AreaTerrenoVerificada
        | K::AreaVerificada
        | K::MedidaFrente
        | K::MedidaDerecha
        | K::MedidaIzquierda
        | K::MedidaFondo => decimal_value(raw),

        // Utility services: anything but a clear affirmative is negative.
        K::ServicioLuz
        | K::ServicioAgua
        | K::ServicioTelefono
        | K::ServicioDesague
        | K::ServicioGas
        | K::ServicioInternet
        | K::ServicioTv => Some(affirmative(raw)),

        K::Mep => material_category(raw),

        _ => text_value(raw.trim().to_string()),
    }
}
