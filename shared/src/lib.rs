//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the mobile client and the Islami
//! App backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration and account DTOs
//!   - **[`dto::user`]**: Favorites, history, profile and premium DTOs
//!   - **[`dto::chat`]**: Chat sessions and question answering DTOs
//!   - **[`dto::content`]**: Hadith search, daily content, reciters, health
//!
//! ## Wire Format
//!
//! The backend is a FastAPI service, so:
//! - Field names are **snake_case** on the wire, except where the backend
//!   mixes in camelCase (`isPremium` on the profile endpoint)
//! - Optional fields are omitted from JSON when `None`
//! - Error bodies look like `{"detail": "..."}` (see [`ErrorResponse`])
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, LoginResponse};
//!
//! let request = LoginRequest {
//!     username: "alice".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: LoginResponse = reqwest::Client::new()
//!     .post("https://islami-app-backend.onrender.com/auth/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
