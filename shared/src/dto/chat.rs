use serde::{Deserialize, Serialize};

/// Source filter value the backend treats as "no filter".
pub const DEFAULT_SOURCE_FILTER: &str = "all";

/// Session lookup or creation (`POST /api/chat/session`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRequest {
    pub session_token: Option<String>,
}

/// A stored chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub content: String,
    #[serde(default)]
    pub sources: Vec<SourceItem>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub session_token: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Anonymous chat request (`POST /api/chat`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub question: String,
    pub source_filter: String,
    pub session_token: Option<String>,
}

/// Authenticated question (`POST /api/ask`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskRequest {
    pub question: String,
    pub source_filter: String,
}

/// Cited source of an answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceItem {
    #[serde(rename = "type")]
    pub source_type: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceItem>,
    pub session_token: String,
}
