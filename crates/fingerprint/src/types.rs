//! Fingerprint and metadata types.
//!
//! These are part of the public contract: any incompatible change to the
//! fingerprint schema must come with a new algorithm version.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` range of word indices in the canonical text.
///
/// Spans index the word sequence, not characters. Generator output always
/// satisfies `start < end`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of words covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when `start < end`. Always holds for generator output; the
    /// comparator re-checks it before emitting a match.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }
}

/// One position-tagged content fingerprint.
///
/// `hash` is a function of `text` only — two k-grams with identical text
/// anywhere in a document carry identical hashes. `span` locates this
/// occurrence for match highlighting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fingerprint {
    /// 64-bit polynomial rolling hash of `text`.
    pub hash: u64,
    /// Word-index span of the originating k-gram.
    pub span: Span,
    /// The k-gram text, kept for human-facing match reporting.
    pub text: String,
}

/// Metadata describing how a fingerprint set was produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintMeta {
    /// Fingerprinting algorithm version; bumped on any change that can
    /// affect generated fingerprints.
    pub algorithm_version: u16,
    /// Human-readable algorithm identifier.
    pub algorithm_name: String,
    /// Config schema version supplied at generation time.
    pub config_version: u32,
    /// K-gram width used.
    pub k: usize,
    /// Word count of the source document.
    pub word_count: usize,
    /// Content hash of the canonical text the set was generated from.
    pub content_hash: String,
}

/// The ordered fingerprint sequence for one submission.
///
/// Owned exclusively by that submission's processed-document record.
/// Immutable once created; reprocessing regenerates the whole set rather
/// than patching it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintSet {
    fingerprints: Vec<Fingerprint>,
    meta: FingerprintMeta,
}

impl FingerprintSet {
    pub fn new(fingerprints: Vec<Fingerprint>, meta: FingerprintMeta) -> Self {
        Self { fingerprints, meta }
    }

    /// Fingerprints in document order (position-ascending).
    pub fn fingerprints(&self) -> &[Fingerprint] {
        &self.fingerprints
    }

    pub fn meta(&self) -> &FingerprintMeta {
        &self.meta
    }

    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fingerprint> {
        self.fingerprints.iter()
    }

    /// The distinct hashes in this set. This is the set-level view the
    /// Jaccard score is computed over.
    pub fn hash_set(&self) -> HashSet<u64> {
        self.fingerprints.iter().map(|fp| fp.hash).collect()
    }
}

impl<'a> IntoIterator for &'a FingerprintSet {
    type Item = &'a Fingerprint;
    type IntoIter = std::slice::Iter<'a, Fingerprint>;

    fn into_iter(self) -> Self::IntoIter {
        self.fingerprints.iter()
    }
}
