//! The canonical document representation.

use serde::{Deserialize, Serialize};

/// An immutable, canonical representation of one document's text.
///
/// Produced only by [`normalize`](crate::normalize). The inner string is
/// lowercase, contains only word characters and single ASCII spaces, and has
/// no leading or trailing whitespace. Downstream stages index into its word
/// sequence, so the text is never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
    version: u32,
    sha256_hex: String,
}

impl NormalizedText {
    pub(crate) fn new(text: String, version: u32, sha256_hex: String) -> Self {
        Self {
            text,
            version,
            sha256_hex,
        }
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Normalization config version this text was produced under.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Versioned SHA-256 content hash, hex-encoded. Stable identity for this
    /// canonical text; suitable as a cache or store key.
    pub fn sha256_hex(&self) -> &str {
        &self.sha256_hex
    }

    /// Iterate the document's words in order.
    ///
    /// Fingerprint positions index into this sequence.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    /// Number of words in the canonical text.
    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// True when normalization produced no text at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
