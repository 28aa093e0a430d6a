//! # Surah Identifier Resolver
//!
//! Maps whatever the backend (or a caller) uses to name a surah onto its id.
//!
//! Accepted references, tried in order:
//! 1. a number or numeral string in `1..=114` (`2`, `"2"`, `" 2 "`)
//! 2. a canonical name, case-insensitive and trimmed (`"Al-Baqara"`)
//! 3. a localized alias, case-insensitive and trimmed (`"Bakara"`)
//!
//! Names are compared after [`fold_name`], which also folds the Turkish
//! dotted and dotless i, so `"FATIR"`, `"fatır"` and `"İhlas"` all match.
//!
//! Anything else resolves to `None`. Resolution has no side effects.

use super::catalog::{SURAHS, SURAH_COUNT};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

static CANONICAL_NAMES: Lazy<HashMap<String, u16>> = Lazy::new(|| {
    SURAHS
        .iter()
        .map(|s| (fold_name(s.name), s.id))
        .collect()
});

static LOCALIZED_NAMES: Lazy<HashMap<String, u16>> = Lazy::new(|| {
    SURAHS
        .iter()
        .flat_map(|s| s.aliases.iter().map(move |alias| (fold_name(alias), s.id)))
        .collect()
});

/// Resolve a raw JSON surah reference.
///
/// Numbers must be whole and in range; `2.5`, `0` and `115` resolve to `None`.
/// Booleans, arrays, objects and `null` never resolve.
pub fn resolve(reference: &Value) -> Option<u16> {
    match reference {
        Value::Number(n) => n.as_f64().and_then(id_from_number),
        Value::String(s) => resolve_str(s),
        _ => None,
    }
}

/// Resolve a textual reference: numeral first, then names.
pub fn resolve_str(reference: &str) -> Option<u16> {
    parse_numeral(reference).or_else(|| resolve_name(reference))
}

/// Resolve a name against the canonical table, then the localized one.
pub fn resolve_name(name: &str) -> Option<u16> {
    let key = fold_name(name);
    CANONICAL_NAMES
        .get(&key)
        .or_else(|| LOCALIZED_NAMES.get(&key))
        .copied()
}

/// Trimmed, lowercased lookup key.
///
/// `İ` and `ı` both become `i`, and the combining dot that `to_lowercase`
/// leaves behind after `İ` is dropped.
pub fn fold_name(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.trim().chars() {
        match c {
            'İ' | 'ı' => key.push('i'),
            '\u{0307}' => {}
            other => key.extend(other.to_lowercase()),
        }
    }
    key
}

fn parse_numeral(raw: &str) -> Option<u16> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().and_then(id_from_number)
}

fn id_from_number(n: f64) -> Option<u16> {
    let in_range = n.is_finite() && n > 0.0 && n <= f64::from(SURAH_COUNT);
    if in_range && n.fract() == 0.0 {
        Some(n as u16)
    } else {
        None
    }
}
