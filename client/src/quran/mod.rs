//! # Quran Verse Pipeline
//!
//! Data-side half of verse retrieval: surah reference resolution, the
//! public-API fallback and normalization into [`CanonicalVerse`]. The HTTP
//! entry point that ties them together lives in
//! [`crate::services::api::quran`].
//!
//! ```text
//! get_quran_verses(query)
//!   ├─► backend GET /api/quran ──ok──────────────┐
//!   │        └─ fail ─► alquran::fetch_surah ─ok─┤
//!   │                          └─ fail ─► []     │
//!   └──────────────────────────── normalize ◄────┘
//! ```

pub mod alquran;
pub mod catalog;
pub mod normalize;
pub mod surah;

pub use catalog::{Surah, SURAHS, SURAH_COUNT};
pub use normalize::{normalize_raw, normalize_verses, CanonicalVerse, RawVerse};
