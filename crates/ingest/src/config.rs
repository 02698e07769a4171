//! Intake configuration.

use serde::{Deserialize, Serialize};

use crate::error::IngestError;

/// Default raw payload ceiling: 10 MiB.
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Configuration for submission intake.
///
/// Serde-friendly so it can be embedded in a combined pipeline config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestConfig {
    /// Configuration schema version.
    pub version: u32,
    /// Raw payload size ceiling in bytes. `None` disables the check.
    pub max_payload_bytes: Option<usize>,
    /// Strip ASCII control characters from string metadata fields.
    pub strip_control_chars: bool,
}

impl IngestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw payload size ceiling.
    pub fn with_max_payload_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_payload_bytes = limit;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), IngestError> {
        if self.version == 0 {
            return Err(IngestError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.max_payload_bytes == Some(0) {
            return Err(IngestError::InvalidConfig(
                "max_payload_bytes must be positive when set".into(),
            ));
        }
        Ok(())
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            version: 1,
            max_payload_bytes: Some(DEFAULT_MAX_PAYLOAD_BYTES),
            strip_control_chars: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = IngestConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_payload_bytes, Some(DEFAULT_MAX_PAYLOAD_BYTES));
        assert!(cfg.strip_control_chars);
    }

    #[test]
    fn zero_version_rejected() {
        let cfg = IngestConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(IngestError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_byte_limit_rejected() {
        let cfg = IngestConfig::new().with_max_payload_bytes(Some(0));
        assert!(matches!(
            cfg.validate(),
            Err(IngestError::InvalidConfig(_))
        ));
    }

    #[test]
    fn unlimited_payload_allowed() {
        let cfg = IngestConfig::new().with_max_payload_bytes(None);
        assert!(cfg.validate().is_ok());
    }
}
