//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the backend REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, current user
//! - [`user`] - Favorites, question history, profile, theme, avatar, premium
//! - [`chat`] - Chat sessions and AI question answering
//! - [`content`] - Hadith search, daily ayah/hadith, reciters, health check
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login
//! Content-Type: application/json
//!
//! { "username": "alice", "password": "MyPassword123!" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "access_token": "eyJhbGciOi...", "token_type": "bearer", "user_id": 7 }
//! ```

pub mod auth;
pub mod chat;
pub mod content;
pub mod user;

pub use auth::*;
pub use chat::*;
pub use content::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Error body returned by the backend for non-2xx responses.
///
/// FastAPI puts a string in `detail` for handled errors and a list of
/// validation problems for 422s, so the field is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: serde_json::Value,
}

impl ErrorResponse {
    /// Human readable message for the error body.
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Generic `{"status": ...}` acknowledgement used by several mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub status: String,
    /// Endpoint specific extras (`count`, `theme_preference`, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
