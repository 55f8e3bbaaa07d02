//! Per-field structural validation registry
//!
//! [`validate`] applies the field's structural acceptance rule to the
//! normalized value. Emptiness always loses (`VACIO`); a registered pattern
//! must match the whole rendered value (`FORMATO_INVALIDO` otherwise); a key
//! without a pattern accepts any non-empty value. The pattern table is a
//! single static structure so the rules stay visible and testable in one
//! place.

use crate::field::FieldKey;
use crate::record::{ErrorCode, FieldValue};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static PATTERNS: Lazy<BTreeMap<FieldKey, Regex>> = Lazy::new(|| {
    let mut table = BTreeMap::new();
    let mut rule = |key: FieldKey, pattern: &str| {
        table.insert(key, Regex::new(pattern).expect("static pattern"));
    };

    // Documentos de identidad
    rule(FieldKey::NumeroDocumento, r"^\d{8}$");
    rule(FieldKey::NumeroRuc, r"^\d{11}$");

    // Contacto: celular peruano (9 + 8 dígitos), correo
    rule(FieldKey::Telefono, r"^9\d{8}$");
    rule(
        FieldKey::CorreoElectronico,
        r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$",
    );

    // Códigos catastrales
    rule(FieldKey::CodigoUnicoCatastral, r"^\d{12}$");
    rule(FieldKey::CodigoContribuyente, r"^\d{6,10}$");
    rule(FieldKey::CodigoPredial, r"^\d{6,10}$");

    // Numeraciones
    rule(FieldKey::NumeroMunicipal, r"^[0-9A-Za-z\-/. ]{1,15}$");
    rule(FieldKey::NumeroInterior, r"^[0-9A-Za-z\-/. ]{1,10}$");

    // Ubicación simple
    rule(FieldKey::Sector, r"^[0-9A-Za-z\- ]{1,10}$");
    rule(FieldKey::Manzana, r"^[0-9A-Za-z\- ]{1,10}$");
    rule(FieldKey::Lote, r"^[0-9A-Za-z\- ]{1,10}$");

    // Zonificación; the DNI-literal collision has its own guard in
    // `validate`, with a dedicated error code.
    rule(FieldKey::Zonificacion, r"^[A-Z0-9\-/]{2,10}$");

    // Áreas y medidas: decimales con dos cifras a lo más
    for key in [
        FieldKey::AreaTerrenoAdquirida,
        FieldKey::AreaTerrenoVerificada,
        FieldKey::AreaVerificada,
        FieldKey::MedidaFrente,
        FieldKey::MedidaDerecha,
        FieldKey::MedidaIzquierda,
        FieldKey::MedidaFondo,
    ] {
        table.insert(key, Regex::new(r"^\d+(\.\d{1,2})?$").expect("static pattern"));
    }

    // Fecha ISO
    table.insert(
        FieldKey::FechaAdquisicion,
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static pattern"),
    );

    table
});

/// The literal a confused recognizer puts into the zoning field when it has
/// actually read the document-type marker.
const DNI_LITERAL: &str = "DNI";

/// Validate a normalized value against the field's structural rule.
///
/// Returns `(valid, error)`. Total: never panics, never errors.
#[must_use]
pub fn validate(key: FieldKey, normalized: Option<&FieldValue>) -> (bool, Option<ErrorCode>) {
    let Some(value) = normalized else {
        return (false, Some(ErrorCode::Vacio));
    };
    if value.is_empty() {
        return (false, Some(ErrorCode::Vacio));
    }
    if key == FieldKey::Zonificacion && value.render().to_uppercase() == DNI_LITERAL {
        return (false, Some(ErrorCode::CoincideLiteralDni));
    }
    match PATTERNS.get(&key) {
        Some(pattern) if !pattern.is_match(&value.render()) => {
            (false, Some(ErrorCode::FormatoInvalido))
        }
        _ => (true, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<FieldValue> {
        Some(FieldValue::Text(s.to_string()))
    }

    #[test]
    fn test_empty_is_vacio_for_every_key() {
        for key in [
            FieldKey::NumeroDocumento,
            FieldKey::UsoPredio,
            FieldKey::Zonificacion,
        ] {
            assert_eq!(validate(key, None), (false, Some(ErrorCode::Vacio)));
            assert_eq!(
                validate(key, text("").as_ref()),
                (false, Some(ErrorCode::Vacio))
            );
        }
        // Truthiness: an unconfirmed service and a zero measure count as empty.
        assert_eq!(
            validate(FieldKey::ServicioLuz, Some(&FieldValue::Flag(false))),
            (false, Some(ErrorCode::Vacio))
        );
        assert_eq!(
            validate(FieldKey::MedidaFrente, Some(&FieldValue::Number(0.0))),
            (false, Some(ErrorCode::Vacio))
        );
    }

    #[test]
    fn test_documento_exact_eight_digits() {
        assert_eq!(
            validate(FieldKey::NumeroDocumento, text("45128890").as_ref()),
            (true, None)
        );
        assert_eq!(
            validate(FieldKey::NumeroDocumento, text("4512889").as_ref()),
            (false, Some(ErrorCode::FormatoInvalido))
        );
    }

    #[test]
    fn test_telefono_is_local_mobile_shape() {
        assert_eq!(
            validate(FieldKey::Telefono, text("987654321").as_ref()),
            (true, None)
        );
        assert_eq!(
            validate(FieldKey::Telefono, text("887654321").as_ref()),
            (false, Some(ErrorCode::FormatoInvalido))
        );
    }

    #[test]
    fn test_correo_shape() {
        assert_eq!(
            validate(
                FieldKey::CorreoElectronico,
                text("juan.perez@mail.com").as_ref()
            ),
            (true, None)
        );
        assert_eq!(
            validate(FieldKey::CorreoElectronico, text("juan.perez@mail").as_ref()),
            (false, Some(ErrorCode::FormatoInvalido))
        );
    }

    #[test]
    fn test_cuc_exact_twelve_digits() {
        assert_eq!(
            validate(FieldKey::CodigoUnicoCatastral, text("010203040506").as_ref()),
            (true, None)
        );
        assert_eq!(
            validate(FieldKey::CodigoUnicoCatastral, text("0102030405").as_ref()),
            (false, Some(ErrorCode::FormatoInvalido))
        );
    }

    #[test]
    fn test_measures_allow_two_decimals() {
        assert_eq!(
            validate(FieldKey::MedidaFrente, Some(&FieldValue::Number(12.5))),
            (true, None)
        );
        assert_eq!(
            validate(FieldKey::AreaVerificada, Some(&FieldValue::Number(120.0))),
            (true, None)
        );
        assert_eq!(
            validate(FieldKey::MedidaFondo, Some(&FieldValue::Number(12.345))),
            (false, Some(ErrorCode::FormatoInvalido))
        );
    }

    #[test]
    fn test_fecha_adquisicion_iso() {
        assert_eq!(
            validate(FieldKey::FechaAdquisicion, text("2015-06-15").as_ref()),
            (true, None)
        );
        assert_eq!(
            validate(FieldKey::FechaAdquisicion, text("15/06/2015").as_ref()),
            (false, Some(ErrorCode::FormatoInvalido))
        );
    }

    #[test]
    fn test_zonificacion_rejects_the_dni_literal() {
        assert_eq!(
            validate(FieldKey::Zonificacion, text("RDM").as_ref()),
            (true, None)
        );
        assert_eq!(
            validate(FieldKey::Zonificacion, text("DNI").as_ref()),
            (false, Some(ErrorCode::CoincideLiteralDni))
        );
    }

    #[test]
    fn test_unregistered_key_accepts_any_non_empty_value() {
        assert_eq!(
            validate(FieldKey::UsoPredio, text("casa habitación").as_ref()),
            (true, None)
        );
    }
}
