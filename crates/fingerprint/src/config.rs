//! Configuration and error types for fingerprint generation.
//!
//! The generator is a pure function of `(canonical_words, config)`; this
//! module defines its entire tunable surface.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the k-gram fingerprint generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintConfig {
    /// Configuration schema version. Any change that can affect generated
    /// fingerprints must bump this so stored sets remain comparable.
    pub version: u32,
    /// Number of words per k-gram.
    ///
    /// Larger values demand longer verbatim runs before anything matches;
    /// smaller values are noisier. Documents shorter than `k` words produce
    /// an empty set.
    pub k: usize,
}

impl FingerprintConfig {
    /// Create a configuration with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the k-gram width. Typical values: 3-8.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), FingerprintError> {
        if self.version == 0 {
            return Err(FingerprintError::InvalidConfigVersion {
                version: self.version,
            });
        }
        if self.k == 0 {
            return Err(FingerprintError::InvalidConfigK { k: self.k });
        }
        Ok(())
    }
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self { version: 1, k: 5 }
    }
}

/// Errors returned by the fingerprint generator.
///
/// Note that a document with fewer than `k` words is *not* an error; it
/// yields an empty fingerprint set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    #[error("invalid config: k must be >= 1 (got {k})")]
    InvalidConfigK { k: usize },

    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_k_is_five() {
        let cfg = FingerprintConfig::default();
        assert_eq!(cfg.k, 5);
        assert_eq!(cfg.version, 1);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_sets_k() {
        let cfg = FingerprintConfig::new().with_k(3);
        assert_eq!(cfg.k, 3);
    }

    #[test]
    fn zero_k_rejected() {
        let cfg = FingerprintConfig::new().with_k(0);
        assert!(matches!(
            cfg.validate(),
            Err(FingerprintError::InvalidConfigK { k: 0 })
        ));
    }

    #[test]
    fn zero_version_rejected() {
        let cfg = FingerprintConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(FingerprintError::InvalidConfigVersion { version: 0 })
        ));
    }

    #[test]
    fn serde_roundtrip() {
        let cfg = FingerprintConfig::new().with_k(7);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: FingerprintConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
