//! Combined pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::PipelineError;
use canonical::NormalizeConfig;
use fingerprint::FingerprintConfig;
use ingest::IngestConfig;
use matcher::MatchConfig;

/// Threshold applied when an assignment does not specify its own.
pub const DEFAULT_THRESHOLD: u32 = 30;

/// One config struct per pipeline stage, plus the default plagiarism
/// threshold for report generation.
///
/// Stage configs are owned by their crates; this type only aggregates them
/// so a caller can thread one value through the whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimscanConfig {
    pub ingest: IngestConfig,
    pub normalize: NormalizeConfig,
    pub fingerprint: FingerprintConfig,
    pub matcher: MatchConfig,
    /// Similarity threshold (percent) above which a pair is counted as
    /// suspicious, used when the assignment metadata carries none.
    pub default_threshold: u32,
}

impl SimscanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden from the environment:
    ///
    /// - `SIMSCAN_K` — k-gram size
    /// - `SIMSCAN_MAX_GAP` — segment consolidation gap
    /// - `SIMSCAN_THRESHOLD` — default plagiarism threshold (percent)
    ///
    /// Unset variables keep their defaults; unparseable values are an error.
    pub fn from_env() -> Result<Self, PipelineError> {
        let mut cfg = Self::default();
        if let Some(k) = read_env("SIMSCAN_K")? {
            cfg.fingerprint.k = k;
        }
        if let Some(max_gap) = read_env("SIMSCAN_MAX_GAP")? {
            cfg.matcher.max_gap = max_gap;
        }
        if let Some(threshold) = read_env("SIMSCAN_THRESHOLD")? {
            cfg.default_threshold = threshold;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate every stage config.
    pub fn validate(&self) -> Result<(), PipelineError> {
        self.ingest.validate()?;
        self.normalize.validate()?;
        self.fingerprint.validate()?;
        self.matcher.validate()?;
        if self.default_threshold > 100 {
            return Err(PipelineError::Config(format!(
                "default_threshold must be within 0..=100, got {}",
                self.default_threshold
            )));
        }
        Ok(())
    }
}

impl Default for SimscanConfig {
    fn default() -> Self {
        Self {
            ingest: IngestConfig::default(),
            normalize: NormalizeConfig::default(),
            fingerprint: FingerprintConfig::default(),
            matcher: MatchConfig::default(),
            default_threshold: DEFAULT_THRESHOLD,
        }
    }
}

fn read_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>, PipelineError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map(Some).map_err(|_| {
            PipelineError::Config(format!("{name} must be a number, got {value:?}"))
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = SimscanConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.fingerprint.k, 5);
        assert_eq!(cfg.matcher.max_gap, 2);
        assert_eq!(cfg.default_threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        let cfg = SimscanConfig {
            default_threshold: 101,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(PipelineError::Config(_))));
    }

    #[test]
    fn invalid_stage_config_propagates() {
        let mut cfg = SimscanConfig::default();
        cfg.fingerprint.k = 0;
        assert!(matches!(
            cfg.validate(),
            Err(PipelineError::Fingerprint(_))
        ));
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = SimscanConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SimscanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
