//! # Content Endpoints
//!
//! Public, read-only content: hadith search, daily picks, reciters and the
//! health check.

use super::client::ApiClient;
use crate::core::error::Result;
use crate::services::transport::ApiRequest;
use shared::{DailyContent, HadithResult, HealthStatus, Reciter};

/// Result count used when the caller does not pick one.
pub const DEFAULT_TOP_K: u32 = 10;

/// Semantic hadith search.
pub async fn hadith_search(
    client: &ApiClient,
    query: &str,
    top_k: Option<u32>,
) -> Result<Vec<HadithResult>> {
    let request = ApiRequest::get(client.url("/api/hadith_search"))
        .query("q", query)
        .query("top_k", top_k.unwrap_or(DEFAULT_TOP_K));
    let results: Vec<HadithResult> = client.send_json(request).await?;
    tracing::debug!(query, count = results.len(), "Hadith search completed");
    Ok(results)
}

pub async fn health(client: &ApiClient) -> Result<HealthStatus> {
    client.send_json(ApiRequest::get(client.url("/health"))).await
}

pub async fn daily_ayah(client: &ApiClient) -> Result<DailyContent> {
    client.send_json(ApiRequest::get(client.url("/api/daily_ayah"))).await
}

pub async fn daily_hadith(client: &ApiClient) -> Result<DailyContent> {
    client.send_json(ApiRequest::get(client.url("/api/daily_hadith"))).await
}

pub async fn reciters(client: &ApiClient) -> Result<Vec<Reciter>> {
    client.send_json(ApiRequest::get(client.url("/api/reciters"))).await
}
