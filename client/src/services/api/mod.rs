//! # Backend API Client Module
//!
//! HTTP client for the Islami App backend. Handles authentication, user data,
//! chat, public content and Quran verse retrieval.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and common functionality
//! ├── auth.rs     - Login, registration, current user
//! ├── user.rs     - Favorites, history, profile, avatar, premium
//! ├── chat.rs     - Chat sessions and AI questions
//! ├── content.rs  - Hadith search, daily picks, reciters, health
//! └── quran.rs    - Verse retrieval with public API fallback
//! ```

pub mod auth;
pub mod chat;
pub mod client;
pub mod content;
pub mod quran;
pub mod user;

pub use auth::*;
pub use chat::*;
pub use client::{ApiClient, ApiClientBuilder};
pub use content::*;
pub use quran::{get_quran_verses, VerseQuery, DEFAULT_LANGUAGE};
pub use user::*;
