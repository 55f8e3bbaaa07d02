//! Cross-field derivation
//!
//! Three conditional steps run after primary field construction:
//!
//! 1. UBIGEO inference - the geographic code looked up from the resolved
//!    departamento/provincia/distrito triple;
//! 2. MES/ANIO fusion - a construction date rebuilt from the partial month
//!    and year spans the recognizer emits when the dictation split them;
//! 3. catastral-code repair - a full-text rescue scan for the 12-digit code,
//!    because the recognizer sometimes fragments or truncates it across
//!    spans. Runs last, unconditionally.
//!
//! Each step only ever adds a field or improves one in place; none of them
//! removes or invalidates data the recognizer produced.

use catastro_core::span::{INFERIDO, INFERIDO_FULLTEXT, MES_ANIO_FUSION, REPARADO_FULLTEXT};
use catastro_core::{
    extract_cuc, parse_fecha_es, validate, FieldKey, FieldResult, FieldValue, SpanRef,
};
use catastro_ubigeo::UbigeoCatalog;
use std::collections::BTreeMap;

/// Apply every derivation step in order.
pub fn apply_derivations(
    fields: &mut BTreeMap<FieldKey, FieldResult>,
    full_text: &str,
    catalog: &UbigeoCatalog,
) {
    infer_ubigeo(fields, catalog);
    fuse_construction_date(fields);
    repair_cuc(fields, full_text);
}

fn normalized_text(fields: &BTreeMap<FieldKey, FieldResult>, key: FieldKey) -> Option<&str> {
    fields
        .get(&key)?
        .normalized
        .as_ref()?
        .as_text()
        .filter(|t| !t.is_empty())
}

fn raw_text(fields: &BTreeMap<FieldKey, FieldResult>, key: FieldKey) -> &str {
    fields
        .get(&key)
        .and_then(|fr| fr.raw.as_deref())
        .unwrap_or("")
}

/// Synthesize the UBIGEO field from the resolved location triple, when the
/// recognizer produced all three parts and no UBIGEO of its own.
fn infer_ubigeo(fields: &mut BTreeMap<FieldKey, FieldResult>, catalog: &UbigeoCatalog) {
    if fields.contains_key(&FieldKey::Ubigeo) || catalog.is_empty() {
        return;
    }
    let (Some(dep), Some(prov), Some(dist)) = (
        normalized_text(fields, FieldKey::Departamento),
        normalized_text(fields, FieldKey::Provincia),
        normalized_text(fields, FieldKey::Distrito),
    ) else {
        return;
    };
    let Some(code) = catalog.lookup(dep, prov, dist) else {
        log::debug!("ubigeo miss for {dep}|{prov}|{dist}");
        return;
    };
    let code = code.to_string();
    fields.insert(
        FieldKey::Ubigeo,
        FieldResult {
            raw: Some(code.clone()),
            normalized: Some(FieldValue::Text(code.clone())),
            valid: Some(true),
            errors: vec![],
            sources: vec![SpanRef::synthetic(INFERIDO, code)],
        },
    );
}

/// Rebuild FECHA_CONSTRUCCION from the partial MES and ANIO spans when the
/// field itself was not recognized.
fn fuse_construction_date(fields: &mut BTreeMap<FieldKey, FieldResult>) {
    if fields.contains_key(&FieldKey::FechaConstruccion) {
        return;
    }
    let mes = raw_text(fields, FieldKey::Mes).to_string();
    let anio = non_digit_runs_to_spaces(raw_text(fields, FieldKey::Anio));
    if mes.is_empty() && anio.is_empty() {
        return;
    }
    let candidate = format!("{mes} {anio}").trim().to_string();
    let Some(iso) = parse_fecha_es(&candidate) else {
        return;
    };
    fields.insert(
        FieldKey::FechaConstruccion,
        FieldResult {
            raw: Some(candidate.clone()),
            normalized: Some(FieldValue::Text(iso)),
            valid: Some(true),
            errors: vec![],
            sources: vec![SpanRef::synthetic(MES_ANIO_FUSION, candidate)],
        },
    );
}

/// Full-text rescue for the 12-digit catastral code.
///
/// When the field's current normalized value is not exactly 12 characters,
/// re-run the extractor over the whole sanitized text; a hit overwrites the
/// normalized value (raw stays as extracted) and is re-validated. When the
/// field is absent entirely, a hit creates it.
fn repair_cuc(fields: &mut BTreeMap<FieldKey, FieldResult>, full_text: &str) {
    if full_text.is_empty() {
        return;
    }
    if let Some(fr) = fields.get_mut(&FieldKey::CodigoUnicoCatastral) {
        let current_len = fr
            .normalized
            .as_ref()
            .map_or(0, |v| v.render().chars().count());
        if current_len == 12 {
            return;
        }
        let Some(found) = extract_cuc(full_text) else {
            return;
        };
        log::debug!("catastral code repaired from full text");
        let value = FieldValue::Text(found.clone());
        let (valid, error) = validate(FieldKey::CodigoUnicoCatastral, Some(&value));
        fr.normalized = Some(value);
        fr.valid = Some(valid);
        fr.errors = error.into_iter().collect();
        fr.sources.push(SpanRef::synthetic(REPARADO_FULLTEXT, found));
        return;
    }
    let Some(found) = extract_cuc(full_text) else {
        return;
    };
    fields.insert(
        FieldKey::CodigoUnicoCatastral,
        FieldResult {
            raw: Some(found.clone()),
            normalized: Some(FieldValue::Text(found.clone())),
            valid: Some(true),
            errors: vec![],
            sources: vec![SpanRef::synthetic(INFERIDO_FULLTEXT, found)],
        },
    );
}

/// "del 2015" -> "2015": replace every non-digit run with a space, trim.
fn non_digit_runs_to_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_gap = false;
    for c in s.chars() {
        if c.is_ascii_digit() {
            out.push(c);
            in_gap = false;
        } else if !in_gap {
            out.push(' ');
            in_gap = true;
        }
    }
    out.trim().to_string()
}
