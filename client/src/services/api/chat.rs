//! # Chat Endpoints
//!
//! Anonymous chat sessions and authenticated question answering.

use super::client::ApiClient;
use crate::core::error::Result;
use crate::services::transport::ApiRequest;
use shared::{
    AskRequest, AskResponse, ChatRequest, ChatResponse, SessionRequest, SessionResponse,
    DEFAULT_SOURCE_FILTER,
};

/// Resume the session for `session_token`, or open a new one.
pub async fn create_or_get_session(
    client: &ApiClient,
    session_token: Option<&str>,
) -> Result<SessionResponse> {
    let request = ApiRequest::post(client.url("/api/chat/session")).json(&SessionRequest {
        session_token: session_token.map(str::to_string),
    })?;
    client.send_json(request).await
}

/// Ask a question inside a chat session.
pub async fn chat(
    client: &ApiClient,
    question: &str,
    source_filter: Option<&str>,
    session_token: Option<&str>,
) -> Result<ChatResponse> {
    let start = std::time::Instant::now();
    let request = ApiRequest::post(client.url("/api/chat")).json(&ChatRequest {
        question: question.to_string(),
        source_filter: source_filter_or_default(source_filter),
        session_token: session_token.map(str::to_string),
    })?;
    let response: ChatResponse = client.send_json(request).await?;
    tracing::debug!(
        sources = response.sources.len(),
        duration_ms = start.elapsed().as_millis(),
        "Chat answer received"
    );
    Ok(response)
}

/// Ask a one-off question; logged to the user's history by the backend.
pub async fn ask_ai(
    client: &ApiClient,
    question: &str,
    source_filter: Option<&str>,
) -> Result<AskResponse> {
    let request = ApiRequest::post(client.url("/api/ask")).json(&AskRequest {
        question: question.to_string(),
        source_filter: source_filter_or_default(source_filter),
    })?;
    client.send_json(request).await
}

fn source_filter_or_default(filter: Option<&str>) -> String {
    filter
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_SOURCE_FILTER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::MockTransport;
    use crate::services::transport::RequestBody;
    use serde_json::json;
    use std::sync::Arc;

    fn client_with(mock: &Arc<MockTransport>) -> ApiClient {
        ApiClient::builder()
            .base_url("https://backend.test")
            .transport(mock.clone())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_new_session_sends_null_token() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, json!({"session_token": "s-1", "messages": []}));
        let client = client_with(&mock);

        let session = create_or_get_session(&client, None).await.unwrap();

        assert_eq!(session.session_token, "s-1");
        assert_eq!(
            mock.requests()[0].body,
            RequestBody::Json(json!({"session_token": null}))
        );
    }

    #[tokio::test]
    async fn test_chat_defaults_source_filter() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, json!({"answer": "...", "sources": [], "session_token": "s-1"}));
        let client = client_with(&mock);

        chat(&client, "Abdest nasıl alınır?", None, Some("s-1")).await.unwrap();

        let request = &mock.requests()[0];
        assert_eq!(request.url, "https://backend.test/api/chat");
        assert_eq!(
            request.body,
            RequestBody::Json(json!({
                "question": "Abdest nasıl alınır?",
                "source_filter": "all",
                "session_token": "s-1"
            }))
        );
    }

    #[tokio::test]
    async fn test_ask_ai_keeps_explicit_filter() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, json!({"answer": "...", "sources": [{"type": "hadis", "name": "Buhari"}]}));
        let client = client_with(&mock);

        let resp = ask_ai(&client, "Oruç", Some("hadis")).await.unwrap();

        assert_eq!(resp.sources[0].name, "Buhari");
        assert_eq!(
            mock.requests()[0].body,
            RequestBody::Json(json!({"question": "Oruç", "source_filter": "hadis"}))
        );
    }

    #[test]
    fn test_empty_filter_means_all() {
        assert_eq!(source_filter_or_default(Some("")), "all");
        assert_eq!(source_filter_or_default(Some("quran")), "quran");
    }
}
