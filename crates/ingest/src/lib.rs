//! Submission intake for the simscan pipeline.
//!
//! [`ingest`] takes a [`RawSubmission`] as the environment hands it over —
//! sparse metadata, a payload in one of several shapes — and produces a
//! validated [`Submission`]: UTF-8 checked, size limited, metadata
//! sanitized, ids and timestamps defaulted. Document payloads are carried
//! through untouched; the [`TextExtractor`] boundary turns them into text
//! downstream.
//!
//! Intake never inspects the content for similarity; it only decides
//! whether a record is well-formed enough to enter the pipeline.
//!
//! # Example
//!
//! ```rust
//! use ingest::{ingest, IngestConfig, RawSubmission, SubmissionMetadata, SubmissionPayload};
//!
//! let raw = RawSubmission {
//!     id: "sub-42".to_string(),
//!     metadata: SubmissionMetadata::default(),
//!     payload: Some(SubmissionPayload::Text("the essay text".to_string())),
//! };
//!
//! let submission = ingest(raw, &IngestConfig::default()).unwrap();
//! assert_eq!(submission.submission_id, "sub-42");
//! ```

mod config;
mod error;
mod extract;
mod types;

pub use crate::config::{IngestConfig, DEFAULT_MAX_PAYLOAD_BYTES};
pub use crate::error::IngestError;
pub use crate::extract::{file_extension, PlainTextExtractor, TextExtractor};
pub use crate::types::{
    RawSubmission, Submission, SubmissionContent, SubmissionMetadata, SubmissionPayload,
};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

/// Validate a raw submission and resolve it into a [`Submission`].
///
/// Requires a payload, enforces the raw size limit, UTF-8-checks byte
/// payloads, sanitizes string metadata, and fills defaults: a v4 UUID when
/// the caller supplied no usable id, `Utc::now()` when no submission
/// timestamp was given.
pub fn ingest(record: RawSubmission, cfg: &IngestConfig) -> Result<Submission, IngestError> {
    cfg.validate()?;

    let payload = record.payload.ok_or(IngestError::MissingPayload)?;

    if let Some(limit) = cfg.max_payload_bytes {
        let raw_len = payload.raw_len();
        if raw_len > limit {
            return Err(IngestError::PayloadTooLarge(format!(
                "raw payload is {raw_len} bytes, limit is {limit}"
            )));
        }
    }

    let content = resolve_content(payload)?;

    let submission_id = match sanitize_field(&record.id, cfg) {
        Some(id) => id,
        None => Uuid::new_v4().to_string(),
    };

    let meta = record.metadata;
    let original_filename = match &content {
        // A document's own filename wins over the metadata copy.
        SubmissionContent::Document { filename, .. } => Some(filename.clone()),
        SubmissionContent::Text(_) => meta
            .original_filename
            .as_deref()
            .and_then(|f| sanitize_field(f, cfg)),
    };

    let submission = Submission {
        submission_id,
        student_id: meta.student_id.as_deref().and_then(|s| sanitize_field(s, cfg)),
        assignment_id: meta
            .assignment_id
            .as_deref()
            .and_then(|s| sanitize_field(s, cfg)),
        submitted_at: meta.submitted_at.unwrap_or_else(Utc::now),
        original_filename,
        content,
        attributes: meta.attributes,
    };

    debug!(
        submission_id = %submission.submission_id,
        assignment_id = submission.assignment_id.as_deref().unwrap_or("-"),
        "submission accepted"
    );
    Ok(submission)
}

/// Validate the payload shape and decode byte payloads.
fn resolve_content(payload: SubmissionPayload) -> Result<SubmissionContent, IngestError> {
    match payload {
        SubmissionPayload::Text(text) => Ok(SubmissionContent::Text(text)),
        SubmissionPayload::TextBytes(bytes) => String::from_utf8(bytes)
            .map(SubmissionContent::Text)
            .map_err(|e| IngestError::InvalidUtf8(e.to_string())),
        SubmissionPayload::Document { filename, bytes } => {
            if filename.trim().is_empty() {
                return Err(IngestError::InvalidMetadata(
                    "document payload requires a filename".into(),
                ));
            }
            Ok(SubmissionContent::Document { filename, bytes })
        }
    }
}

/// Trim a string field, optionally stripping control characters.
/// Returns `None` when nothing usable remains.
fn sanitize_field(value: &str, cfg: &IngestConfig) -> Option<String> {
    let cleaned: String = if cfg.strip_control_chars {
        value.chars().filter(|c| !c.is_control()).collect()
    } else {
        value.to_string()
    };
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
