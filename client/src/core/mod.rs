//! # Core Abstractions
//!
//! - **[`config`]**: Client configuration (`ClientConfig`) loaded from the environment
//! - **[`error`]**: Client error types (`ApiError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`ApiService`)
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`ApiError`]:
//!
//! ```rust,ignore
//! use islami_client::core::error::{ApiError, Result};
//!
//! async fn premium(client: &ApiClient) -> Result<bool> {
//!     match client.get_profile().await {
//!         Ok(profile) => Ok(profile.is_premium),
//!         Err(e) if e.is_unauthorized() => Ok(false),
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use service::ApiService;
