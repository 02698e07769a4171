//! Simscan canonical text layer.
//!
//! This crate normalizes raw extracted text into a deterministic canonical
//! form that the fingerprint generator can rely on for stable identity.
//!
//! ## What we do
//!
//! - Optional Unicode normalization (NFKC by default)
//! - Locale-free lowercasing
//! - Removal of every character that is not a word character or whitespace
//! - Whitespace collapsing to single ASCII spaces, trimmed at both ends
//! - A versioned SHA-256 content hash for downstream identity
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same text and config in,
//! same [`NormalizedText`] out, on any machine.
//!
//! ## Totality
//!
//! Normalization never fails: whitespace-only or empty input produces an
//! empty canonical string, which is a valid (if useless) document that simply
//! yields no fingerprints downstream. Normalization is also idempotent —
//! running it on its own output is a no-op.

mod config;
mod document;
mod hash;
mod pipeline;
mod whitespace;

pub use crate::config::{NormalizeConfig, NormalizeError};
pub use crate::document::NormalizedText;
pub use crate::hash::hash_canonical_bytes;
pub use crate::pipeline::normalize;
pub use crate::whitespace::collapse_whitespace;
