//! # Logging Infrastructure
//!
//! Structured logging for the client and the command-line front end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at startup and keep the guard alive
//! let _guard = islami_client::debug::init();
//!
//! tracing::info!(endpoint = "/api/quran", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `islami_client=info,warn`)
//! - `ISLAMI_LOG_DIR`: Directory for a daily rolling log file (off when unset)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::{init, init_with};
