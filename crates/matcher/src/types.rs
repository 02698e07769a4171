use fingerprint::Span;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of one submission. Opaque to the matching layer; the
/// environment supplies whatever identity scheme it uses.
pub type SubmissionId = String;

/// Configuration for a comparison run.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs or passed across process boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Configuration schema version for this match config.
    pub version: u32,
    /// Maximum gap, in k-grams, tolerated between two raw matches for them
    /// to be merged into one segment. The gap must close in *both* the
    /// source and the target position spaces simultaneously.
    ///
    /// The default of 2 deliberately bridges small interruptions (a renamed
    /// variable, a swapped word) inside an otherwise-copied passage.
    pub max_gap: usize,
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the consolidation gap tolerance.
    pub fn with_max_gap(mut self, max_gap: usize) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: 1,
            max_gap: 2,
        }
    }
}

/// A contiguous run of one or more colliding k-grams merged together.
///
/// Spans are word-index ranges in the respective documents. After merging,
/// source and target spans need not have equal lengths; `text` is the text
/// of the first matched k-gram in the run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchSegment {
    pub source_span: Span,
    pub target_span: Span,
    pub text: String,
}

impl MatchSegment {
    /// The same segment viewed from the other document's perspective.
    pub fn swapped(&self) -> Self {
        Self {
            source_span: self.target_span,
            target_span: self.source_span,
            text: self.text.clone(),
        }
    }
}

/// The outcome of comparing one unordered pair of submissions.
///
/// Ephemeral: produced fresh per report run, scored relative to the two
/// fingerprint sets at comparison time, never persisted incrementally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonResult {
    pub source_id: SubmissionId,
    pub target_id: SubmissionId,
    /// Jaccard similarity over the two hash sets, in `[0, 100]`.
    pub score: f64,
    /// Consolidated matching passages, in target document order.
    pub segments: Vec<MatchSegment>,
}

impl ComparisonResult {
    /// Canonical unordered pair key: the two ids in lexicographic order.
    pub fn pair_key(&self) -> (&str, &str) {
        if self.source_id <= self.target_id {
            (&self.source_id, &self.target_id)
        } else {
            (&self.target_id, &self.source_id)
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid comparison configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// A submission was compared before its fingerprints were processed and
    /// stored. Callers typically skip the pair or surface a
    /// processing-incomplete warning.
    #[error("no stored fingerprints for submission {submission_id}")]
    MissingFingerprints { submission_id: SubmissionId },
}
