//! # AlQuran Cloud Fallback
//!
//! Fetches a whole surah from the public `api.alquran.cloud` API when the
//! primary backend is unavailable.
//!
//! Three editions are requested one after another:
//!
//! ```text
//! GET {base}/surah/{n}/quran-uthmani   Arabic text        (always)
//! GET {base}/surah/{n}/tr.diyanet      Turkish translation (language == "tr")
//! GET {base}/surah/{n}/ar.alafasy      Alafasy recitation (always)
//! ```
//!
//! Any non-2xx status or unparsable body aborts the whole fetch; there are no
//! partial results. The three `ayahs` arrays are joined by position, with the
//! Arabic array deciding how many verses come out.

use super::normalize::RawVerse;
use super::surah;
use crate::core::error::{ApiError, Result};
use crate::services::transport::{ApiRequest, HttpTransport};
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

pub const ARABIC_EDITION: &str = "quran-uthmani";
pub const TURKISH_EDITION: &str = "tr.diyanet";
pub const AUDIO_EDITION: &str = "ar.alafasy";

/// Surah fetched when the caller did not name one.
pub const DEFAULT_SURAH: &str = "1";

/// The only language with a translation edition wired up.
pub const TRANSLATED_LANGUAGE: &str = "tr";

/// `{ "data": { "ayahs": [...] } }`
#[derive(Debug, Default, Deserialize)]
pub struct EditionResponse {
    #[serde(default)]
    pub data: Option<EditionData>,
}

/// `ayahs` may be missing or `null`; both read as an empty edition.
#[derive(Debug, Default, Deserialize)]
pub struct EditionData {
    #[serde(default)]
    pub ayahs: Option<Vec<EditionAyah>>,
}

/// One ayah entry. Which fields are filled depends on the edition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EditionAyah {
    #[serde(default)]
    pub surah: Option<EditionSurah>,
    #[serde(rename = "numberInSurah", default)]
    pub number_in_surah: Option<u32>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EditionSurah {
    #[serde(default)]
    pub number: Option<u16>,
}

/// Client for the public Quran API.
pub struct AlQuranFetcher<'a> {
    transport: &'a dyn HttpTransport,
    base_url: &'a str,
}

impl<'a> AlQuranFetcher<'a> {
    pub fn new(transport: &'a dyn HttpTransport, base_url: &'a str) -> Self {
        Self { transport, base_url }
    }

    /// Fetch and combine a complete surah.
    ///
    /// `surah` defaults to `"1"`. Names are resolved to ids first so that
    /// `"Bakara"` fetches surah 2; unresolvable references are sent as given.
    pub async fn fetch_surah(
        &self,
        surah: Option<&str>,
        language: Option<&str>,
    ) -> Result<Vec<RawVerse>> {
        let segment = surah_segment(surah);
        debug!(surah = %segment, language = ?language, "Fetching surah from fallback API");

        let arabic = self.fetch_edition(&segment, ARABIC_EDITION).await?;

        let translation = if language == Some(TRANSLATED_LANGUAGE) {
            self.fetch_edition(&segment, TURKISH_EDITION).await?
        } else {
            Vec::new()
        };

        let audio = self.fetch_edition(&segment, AUDIO_EDITION).await?;

        let misaligned = (!translation.is_empty() && translation.len() != arabic.len())
            || audio.len() != arabic.len();
        if misaligned {
            warn!(
                surah = %segment,
                arabic = arabic.len(),
                translation = translation.len(),
                audio = audio.len(),
                "Fallback editions differ in length, combining by position"
            );
        }

        Ok(combine_editions(&arabic, &translation, &audio, language))
    }

    async fn fetch_edition(&self, surah: &str, edition: &str) -> Result<Vec<EditionAyah>> {
        let url = edition_url(self.base_url, surah, edition)?;
        let response = self.transport.execute(ApiRequest::get(url.as_str())).await?;

        if !response.is_success() {
            warn!(
                edition = edition,
                status = response.status,
                "Fallback edition request failed"
            );
            return Err(ApiError::Http {
                status: response.status,
                message: format!("AlQuran {} error", edition),
            });
        }

        let parsed: EditionResponse = response.json()?;
        Ok(parsed.data.and_then(|d| d.ayahs).unwrap_or_default())
    }
}

/// Path segment for the surah: resolved id when possible, else the raw text.
pub fn surah_segment(surah: Option<&str>) -> String {
    let raw = surah
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SURAH);
    match surah::resolve_str(raw) {
        Some(id) => id.to_string(),
        None => raw.to_string(),
    }
}

/// `{base}/surah/{surah}/{edition}` with the surah percent-encoded.
pub fn edition_url(base_url: &str, surah: &str, edition: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ApiError::Config(format!("invalid fallback base URL {}: {}", base_url, e)))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::Config(format!("fallback base URL {} cannot have a path", base_url)))?
        .pop_if_empty()
        .extend(["surah", surah, edition]);
    Ok(url)
}

/// Join the three editions by position.
///
/// The Arabic sequence decides the output length. A missing or empty
/// translation falls back to the Arabic text; a missing or empty audio URL
/// leaves `audio_url` unset.
pub fn combine_editions(
    arabic: &[EditionAyah],
    translation: &[EditionAyah],
    audio: &[EditionAyah],
    language: Option<&str>,
) -> Vec<RawVerse> {
    arabic
        .iter()
        .enumerate()
        .map(|(idx, ar)| {
            let translated = translation
                .get(idx)
                .and_then(|t| t.text.clone())
                .filter(|t| !t.is_empty());
            let audio_url = audio
                .get(idx)
                .and_then(|a| a.audio.clone())
                .filter(|a| !a.is_empty());

            RawVerse {
                surah: ar.surah.as_ref().and_then(|s| s.number).map(Value::from),
                ayah: ar.number_in_surah.map(Value::from),
                text: translated.or_else(|| ar.text.clone()),
                language: language.map(str::to_string),
                audio_url,
                ..RawVerse::default()
            }
        })
        .collect()
}
