//! Configuration for the canonical text pipeline.
//!
//! The `version` field exists for determinism bookkeeping: any change to
//! normalization behavior (even a bug fix) must bump it, so that content
//! hashes produced under the old behavior remain distinguishable from hashes
//! produced under the new one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for text normalization.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs. For a given `version`, the output is stable across machines,
/// operating systems, and locales.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Schema version of the normalization behavior. Must be >= 1; version 0
    /// is reserved. Participates in the content hash.
    pub version: u32,
    /// If true, apply Unicode NFKC normalization before any other transform,
    /// so visually equivalent inputs canonicalize identically.
    pub normalize_unicode: bool,
}

impl NormalizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFKC normalization.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), NormalizeError> {
        if self.version == 0 {
            return Err(NormalizeError::InvalidVersion { version: 0 });
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
        }
    }
}

/// Errors produced by normalization configuration validation.
///
/// Normalization itself is total; only the config can be invalid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid normalize config version {version}; expected >= 1")]
    InvalidVersion { version: u32 },
}
