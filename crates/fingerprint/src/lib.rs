//! # Simscan document fingerprinting
//!
//! This crate turns a canonical word sequence into a position-aware
//! fingerprint set: one fingerprint per k-gram (a window of `k` consecutive
//! words), tagged with the word-index span it covers and a 64-bit rolling
//! hash of its text.
//!
//! ## Contract
//!
//! - The generator **only** consumes canonical text produced by the upstream
//!   normalization pipeline. It never normalizes or tokenizes raw input.
//! - The API is a pure function of `(canonical_words, config)` with no I/O
//!   and no reliance on clocks or global state.
//! - Output order is document order (position-ascending); the comparator's
//!   adjacency consolidation depends on it.
//!
//! Invariant: for the same canonical word sequence and the same
//! [`FingerprintConfig`], the fingerprint set is bit identical.
//!
//! ## Short documents
//!
//! A document with fewer than `k` words produces an **empty** fingerprint
//! set. That is a valid, non-error outcome: such documents trivially score
//! zero similarity against everything.
//!
//! ## Example
//!
//! ```
//! use canonical::{normalize, NormalizeConfig};
//! use fingerprint::{generate, FingerprintConfig};
//!
//! let doc = normalize(
//!     "the quick brown fox jumps over the lazy dog",
//!     &NormalizeConfig::default(),
//! );
//! let set = generate(&doc, &FingerprintConfig::default()).unwrap();
//!
//! assert_eq!(set.len(), 5); // 9 words, k = 5
//! assert_eq!(set.fingerprints()[0].span.start, 0);
//! assert_eq!(set.fingerprints()[4].span.end, 9);
//! ```

mod config;
mod hash;
mod kgram;
mod types;

pub use crate::config::{FingerprintConfig, FingerprintError};
pub use crate::hash::hash_kgram;
pub use crate::kgram::{kgrams, KGram};
pub use crate::types::{Fingerprint, FingerprintMeta, FingerprintSet, Span};

use canonical::NormalizedText;

/// Current fingerprinting algorithm version for this crate.
pub const FINGERPRINT_VERSION: u16 = 1;

/// Human-readable algorithm identifier.
pub const FINGERPRINT_ALGORITHM: &str = "kgram_poly101_v1";

/// Generate the fingerprint set for a normalized document.
///
/// Convenience wrapper over [`generate_from_words`] that takes the canonical
/// document and records its content hash in the set metadata.
pub fn generate(
    doc: &NormalizedText,
    cfg: &FingerprintConfig,
) -> Result<FingerprintSet, FingerprintError> {
    let words: Vec<&str> = doc.words().collect();
    generate_from_words(&words, doc.sha256_hex(), cfg)
}

/// Generate fingerprints from an already-split canonical word sequence.
///
/// `content_hash` identifies the canonical text the words came from and is
/// carried in the metadata for traceability.
pub fn generate_from_words<S>(
    words: &[S],
    content_hash: &str,
    cfg: &FingerprintConfig,
) -> Result<FingerprintSet, FingerprintError>
where
    S: AsRef<str>,
{
    cfg.validate()?;

    let fingerprints: Vec<Fingerprint> = kgrams(words, cfg.k)
        .into_iter()
        .map(|kgram| {
            let hash = hash_kgram(&kgram.text);
            Fingerprint {
                hash,
                span: kgram.span,
                text: kgram.text,
            }
        })
        .collect();

    Ok(FingerprintSet::new(
        fingerprints,
        FingerprintMeta {
            algorithm_version: FINGERPRINT_VERSION,
            algorithm_name: FINGERPRINT_ALGORITHM.to_string(),
            config_version: cfg.version,
            k: cfg.k,
            word_count: words.len(),
            content_hash: content_hash.to_string(),
        },
    ))
}
