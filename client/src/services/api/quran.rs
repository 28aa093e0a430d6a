//! # Quran Verse Endpoint
//!
//! `GET /api/quran` with transparent fallback to the public AlQuran Cloud API.
//!
//! Verse retrieval never fails from the caller's point of view: a backend
//! failure (network error, timeout, non-2xx) switches to the fallback, and a
//! fallback failure yields an empty list. Both are reported through `warn!`.

use super::client::ApiClient;
use crate::quran::alquran::AlQuranFetcher;
use crate::quran::{normalize_raw, normalize_verses, CanonicalVerse};
use crate::services::transport::ApiRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn, Instrument};

/// Language the backend and the fallback default to.
pub const DEFAULT_LANGUAGE: &str = "tr";

/// Filters for a verse lookup. Absent or empty filters are not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseQuery {
    /// Surah id, numeral or name
    pub surah: Option<String>,
    pub ayah: Option<u32>,
    /// Defaults to `"tr"`
    pub language: Option<String>,
    /// Free-text search, sent as `search`
    pub q: Option<String>,
    pub reciter: Option<String>,
}

impl Default for VerseQuery {
    fn default() -> Self {
        Self {
            surah: None,
            ayah: None,
            language: Some(DEFAULT_LANGUAGE.to_string()),
            q: None,
            reciter: None,
        }
    }
}

impl VerseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surah(mut self, surah: impl ToString) -> Self {
        self.surah = Some(surah.to_string());
        self
    }

    pub fn ayah(mut self, ayah: u32) -> Self {
        self.ayah = Some(ayah);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Send no language filter at all (the fallback then skips translation).
    pub fn any_language(mut self) -> Self {
        self.language = None;
        self
    }

    pub fn search(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn reciter(mut self, reciter: impl Into<String>) -> Self {
        self.reciter = Some(reciter.into());
        self
    }
}

/// Build the backend request for `query`.
pub(crate) fn verse_request(client: &ApiClient, query: &VerseQuery) -> ApiRequest {
    let mut request = ApiRequest::get(client.url("/api/quran"))
        .query_opt("surah", query.surah.as_deref());
    if let Some(ayah) = query.ayah.filter(|a| *a != 0) {
        request = request.query("ayah", ayah);
    }
    request
        .query_opt("language", query.language.as_deref())
        .query_opt("search", query.q.as_deref())
        .query_opt("reciter", query.reciter.as_deref())
}

/// Fetch verses, falling back to the public API when the backend fails.
pub async fn get_quran_verses(client: &ApiClient, query: &VerseQuery) -> Vec<CanonicalVerse> {
    let span = tracing::info_span!(
        "get_quran_verses",
        trace_id = %uuid::Uuid::new_v4(),
        surah = ?query.surah,
        language = ?query.language,
    );
    fetch_verses(client, query).instrument(span).await
}

async fn fetch_verses(client: &ApiClient, query: &VerseQuery) -> Vec<CanonicalVerse> {
    match client.send(verse_request(client, query)).await {
        Ok(response) if response.is_success() => {
            let payload = serde_json::from_slice::<Value>(&response.body).unwrap_or_else(|e| {
                warn!(error = %e, "Backend verse response is not JSON");
                Value::Null
            });
            let verses = normalize_verses(payload);
            debug!(count = verses.len(), source = "backend", "Verses fetched");
            verses
        }
        Ok(response) => {
            warn!(status = response.status, "Backend verse lookup failed, using fallback");
            fetch_fallback(client, query).await
        }
        Err(e) => {
            warn!(error = %e, "Backend unreachable, using fallback");
            fetch_fallback(client, query).await
        }
    }
}

async fn fetch_fallback(client: &ApiClient, query: &VerseQuery) -> Vec<CanonicalVerse> {
    let fetcher = AlQuranFetcher::new(client.transport(), &client.config().fallback_base_url);
    match fetcher
        .fetch_surah(query.surah.as_deref(), query.language.as_deref())
        .await
    {
        Ok(raw) => {
            let verses = normalize_raw(raw);
            info!(count = verses.len(), source = "alquran", "Verses fetched from fallback");
            verses
        }
        Err(e) => {
            warn!(error = %e, "Fallback verse lookup failed, returning no verses");
            Vec::new()
        }
    }
}
