//! # Services
//!
//! - [`api`] - backend endpoints and the verse retrieval entry point
//! - [`transport`] - the HTTP seam every request goes through
//! - [`token`] - bearer token persistence

pub mod api;
pub mod token;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;
