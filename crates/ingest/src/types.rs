//! Data model for submission intake.
//!
//! A [`RawSubmission`] is what the environment hands us: an optional caller
//! id, sparse metadata, and a payload in one of several shapes. Intake
//! validates it and produces a [`Submission`] with every field resolved —
//! ids generated where missing, timestamps defaulted, metadata sanitized —
//! ready for extraction and fingerprinting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload shapes accepted at intake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmissionPayload {
    /// Plain text supplied directly.
    Text(String),
    /// Text supplied as raw bytes; must decode as UTF-8.
    TextBytes(Vec<u8>),
    /// An uploaded document. The bytes are opaque at intake; a
    /// [`TextExtractor`](crate::TextExtractor) turns them into text
    /// downstream, keyed on the filename extension.
    Document { filename: String, bytes: Vec<u8> },
}

impl SubmissionPayload {
    /// Raw size in bytes, used for the intake size limit.
    pub fn raw_len(&self) -> usize {
        match self {
            SubmissionPayload::Text(text) => text.len(),
            SubmissionPayload::TextBytes(bytes) => bytes.len(),
            SubmissionPayload::Document { bytes, .. } => bytes.len(),
        }
    }
}

/// Metadata supplied alongside a submission. Every field is optional;
/// intake fills defaults and strips control characters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionMetadata {
    /// Who submitted. Opaque to this layer.
    pub student_id: Option<String>,
    /// Which assignment this belongs to.
    pub assignment_id: Option<String>,
    /// When the submission was received. Defaults to now.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Original filename, if the submission arrived as a file.
    pub original_filename: Option<String>,
    /// Opaque attribute blob passed through unchanged.
    pub attributes: Option<serde_json::Value>,
}

/// A submission as received, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawSubmission {
    /// Caller-supplied id. When empty or missing a v4 UUID is generated.
    pub id: String,
    pub metadata: SubmissionMetadata,
    pub payload: Option<SubmissionPayload>,
}

/// Content of a validated submission.
///
/// Text payloads have already been UTF-8 checked; document payloads carry
/// their bytes through untouched for the extraction boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmissionContent {
    Text(String),
    Document { filename: String, bytes: Vec<u8> },
}

/// A validated submission with all defaults applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    /// Stable id for this submission; sanitized caller id or generated UUID.
    pub submission_id: String,
    pub student_id: Option<String>,
    pub assignment_id: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub original_filename: Option<String>,
    pub content: SubmissionContent,
    pub attributes: Option<serde_json::Value>,
}
