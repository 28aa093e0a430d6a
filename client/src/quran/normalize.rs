//! # Verse Normalizer
//!
//! Turns verse records from either upstream into [`CanonicalVerse`].
//!
//! Normalization never fails. Input that is not a list yields an empty list,
//! a list element that is not an object yields an empty record, and a surah
//! reference that cannot be resolved leaves `surah_id` unset. Order is kept,
//! nothing is filtered, deduplicated or sorted.
//!
//! A known field sent as `null` reads as absent but stays in `extra`, so the
//! key is still present (as `null`) when the record is serialized again.

use super::surah;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A verse record as produced by an upstream, before normalization.
///
/// Fields with an unexpected JSON type (say a numeric `text`) are left in
/// `extra` untouched instead of being coerced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawVerse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surah: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ayah: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawVerse {
    /// Split a JSON record into known fields and pass-through extras.
    pub fn from_record(record: Value) -> Self {
        let mut fields = match record {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let surah = take_present(&mut fields, "surah");
        let ayah = take_present(&mut fields, "ayah");
        let text = take_string(&mut fields, "text");
        let language = take_string(&mut fields, "language");
        let audio_url = take_string(&mut fields, "audio_url");

        // Derived below; upstream copies are superseded.
        fields.remove("surah_id");
        fields.remove("ayah_id");

        Self {
            surah,
            ayah,
            text,
            language,
            audio_url,
            extra: fields,
        }
    }
}

/// Remove `key` unless it is missing or `null`.
fn take_present(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    match fields.get(key) {
        None | Some(Value::Null) => None,
        Some(_) => fields.remove(key),
    }
}

/// Remove `key` when it holds a string; leave other types in place.
fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(_)) => match fields.remove(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        },
        _ => None,
    }
}

/// The unified per-verse record handed to the rest of the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalVerse {
    /// Surah reference exactly as the upstream sent it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surah: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ayah: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Resolved surah id in `1..=114`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surah_id: Option<u16>,
    /// Same value as `ayah`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ayah_id: Option<Value>,
    /// Every other upstream field, passed through
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CanonicalVerse {
    /// Ayah number when the upstream sent a whole number.
    pub fn ayah_number(&self) -> Option<u32> {
        let ayah = self.ayah.as_ref()?;
        match ayah {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<RawVerse> for CanonicalVerse {
    fn from(raw: RawVerse) -> Self {
        let surah_id = raw.surah.as_ref().and_then(surah::resolve);
        let ayah_id = raw.ayah.clone();
        Self {
            surah: raw.surah,
            ayah: raw.ayah,
            text: raw.text,
            language: raw.language,
            audio_url: raw.audio_url,
            surah_id,
            ayah_id,
            extra: raw.extra,
        }
    }
}

/// Normalize an arbitrary JSON payload. Non-list payloads yield `[]`.
pub fn normalize_verses(payload: Value) -> Vec<CanonicalVerse> {
    match payload {
        Value::Array(records) => records
            .into_iter()
            .map(|record| CanonicalVerse::from(RawVerse::from_record(record)))
            .collect(),
        _ => Vec::new(),
    }
}

/// Normalize records that are already split into fields.
pub fn normalize_raw(verses: Vec<RawVerse>) -> Vec<CanonicalVerse> {
    verses.into_iter().map(CanonicalVerse::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_non_list_payloads_yield_empty() {
        assert!(normalize_verses(Value::Null).is_empty());
        assert!(normalize_verses(json!({"surah": 1, "ayah": 1})).is_empty());
        assert!(normalize_verses(json!("<html>")).is_empty());
        assert!(normalize_verses(json!([])).is_empty());
    }

    #[test]
    fn test_localized_name_gets_surah_id() {
        let verses = normalize_verses(json!([
            {"surah": "Fatiha", "ayah": 1, "text": "x", "language": "tr"}
        ]));
        assert_eq!(verses.len(), 1);

        let verse = &verses[0];
        assert_eq!(verse.surah, Some(json!("Fatiha")));
        assert_eq!(verse.surah_id, Some(1));
        assert_eq!(verse.ayah_id, Some(json!(1)));
        assert_eq!(verse.text.as_deref(), Some("x"));
        assert_eq!(verse.language.as_deref(), Some("tr"));
        assert_eq!(
            serde_json::to_value(verse).unwrap(),
            json!({
                "surah": "Fatiha", "ayah": 1, "text": "x", "language": "tr",
                "surah_id": 1, "ayah_id": 1
            })
        );
    }

    #[test]
    fn test_out_of_range_number_is_unresolved() {
        let verses = normalize_verses(json!([{"surah": 200, "ayah": 1}]));
        assert_eq!(verses[0].surah_id, None);
        assert_eq!(verses[0].surah, Some(json!(200)));
        assert_eq!(verses[0].ayah_id, Some(json!(1)));
    }

    #[test]
    fn test_backend_extras_pass_through() {
        let verses = normalize_verses(json!([{
            "id": 17,
            "surah": "Al-Baqara",
            "ayah": 255,
            "text": "Allah...",
            "translation": "Allah, O'ndan başka ilah yoktur",
            "language": "tr",
            "surah_id": 999,
            "text_ar": "ٱللَّهُ",
            "audio_url": null
        }]));
        let verse = &verses[0];
        assert_eq!(verse.surah_id, Some(2));
        assert_eq!(verse.ayah_number(), Some(255));
        assert_eq!(verse.audio_url, None);
        assert_eq!(verse.extra.get("id"), Some(&json!(17)));
        assert_eq!(verse.extra.get("text_ar"), Some(&json!("ٱللَّهُ")));
        assert!(!verse.extra.contains_key("surah_id"));

        let value = serde_json::to_value(verse).unwrap();
        assert_eq!(value["surah_id"], json!(2));
        assert_eq!(value.get("audio_url"), Some(&Value::Null));
        assert_eq!(value["translation"], json!("Allah, O'ndan başka ilah yoktur"));
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let verses = normalize_verses(json!([
            {"surah": 2, "ayah": 3},
            {"surah": 1, "ayah": 1},
            {"surah": 2, "ayah": 3}
        ]));
        let keys: Vec<_> = verses
            .iter()
            .map(|v| (v.surah_id, v.ayah_number()))
            .collect();
        assert_eq!(keys, vec![(Some(2), Some(3)), (Some(1), Some(1)), (Some(2), Some(3))]);
    }

    #[test]
    fn test_non_object_element_becomes_empty_record() {
        let verses = normalize_verses(json!([null, 5, {"surah": "36"}]));
        assert_eq!(verses.len(), 3);
        assert_eq!(verses[0].surah, None);
        assert_eq!(verses[0].surah_id, None);
        assert!(verses[1].extra.is_empty());
        assert_eq!(verses[2].surah_id, Some(36));
        assert_eq!(verses[2].ayah_id, None);
    }

    #[test]
    fn test_mistyped_fields_stay_in_extra() {
        let verses = normalize_verses(json!([{"surah": 1, "text": 42}]));
        assert_eq!(verses[0].text, None);
        assert_eq!(verses[0].extra.get("text"), Some(&json!(42)));
        assert_eq!(serde_json::to_value(&verses[0]).unwrap()["text"], json!(42));
    }

    #[test]
    fn test_null_fields_keep_their_keys() {
        let verses = normalize_verses(json!([
            {"surah": null, "ayah": null, "text": "x", "audio_url": null}
        ]));
        let verse = &verses[0];
        assert_eq!(verse.surah, None);
        assert_eq!(verse.surah_id, None);
        assert_eq!(verse.ayah_id, None);
        assert_eq!(verse.audio_url, None);

        let value = serde_json::to_value(verse).unwrap();
        assert_eq!(
            value,
            json!({"surah": null, "ayah": null, "text": "x", "audio_url": null})
        );
    }
}
