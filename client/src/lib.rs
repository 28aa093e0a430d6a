//! # Islami App Client
//!
//! HTTP access layer for the Islami App backend.
//!
//! ## Architecture
//!
//! - [`core`] - configuration, error type and the [`ApiService`] trait
//! - [`services`] - transport, token storage and the endpoint functions
//! - [`quran`] - surah catalog, name resolution, verse normalization and the
//!   public alquran.cloud fallback
//! - [`debug`] - logging setup
//!
//! ## Example
//!
//! ```rust,ignore
//! use islami_client::{ApiClient, ApiService, VerseQuery};
//!
//! let client = ApiClient::new()?;
//! client.login("ali", "Sifre123").await?;
//!
//! // Backend first, public API when the backend is down
//! let verses = client.get_quran_verses(&VerseQuery::new().surah("Bakara")).await;
//! for verse in verses {
//!     println!("{:?}:{:?} {}", verse.surah_id, verse.ayah_number(), verse.text.unwrap_or_default());
//! }
//! ```

pub mod core;
pub mod debug;
pub mod quran;
pub mod services;

pub use crate::core::{ApiError, ApiService, ClientConfig, Result};
pub use quran::CanonicalVerse;
pub use services::api::{ApiClient, ApiClientBuilder, VerseQuery};
pub use services::token::{Credentials, FileTokenStore, MemoryTokenStore, TokenStore};
pub use services::transport::{HttpTransport, ReqwestTransport};
