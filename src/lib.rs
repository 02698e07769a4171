//! Simscan: a document-similarity engine for assignment submissions.
//!
//! The pipeline runs in four stages, one member crate per stage:
//!
//! 1. **ingest** — validate the raw submission record, default ids and
//!    timestamps, carry document payloads to the text-extraction boundary.
//! 2. **canonical** — deterministic text normalization: NFKC, lowercase,
//!    word characters only, single-spaced.
//! 3. **fingerprint** — position-aware k-gram fingerprints over the word
//!    sequence, polynomial rolling hash.
//! 4. **matcher** — pairwise comparison (Jaccard score plus consolidated
//!    matching segments) and assignment-level reporting over the full
//!    n·(n-1)/2 pair matrix.
//!
//! This crate stitches the stages together: the [`FingerprintStore`] keeps
//! processed documents in memory, [`process_text`] / [`process_submission`]
//! / [`process_batch`] fill it, and [`generate_report`] compares everything
//! an assignment has.
//!
//! # Example
//!
//! ```rust
//! use simscan::{generate_report, process_text, AssignmentMeta, FingerprintStore, SimscanConfig};
//! use chrono::Utc;
//!
//! let cfg = SimscanConfig::default();
//! let store = FingerprintStore::new();
//!
//! process_text("alice", "the quick brown fox jumps over the lazy dog", &cfg, &store).unwrap();
//! process_text("bob", "the quick brown fox jumps over the lazy dog", &cfg, &store).unwrap();
//!
//! let meta = AssignmentMeta {
//!     assignment_id: "essay-1".to_string(),
//!     title: "Essay 1".to_string(),
//!     deadline: Utc::now(),
//!     plagiarism_threshold: 30,
//! };
//! let ids = vec!["alice".to_string(), "bob".to_string()];
//! let report = generate_report(&meta, &ids, &store, &cfg).unwrap();
//! assert_eq!(report.comparisons[0].score, 100.0);
//! ```

mod config;
mod store;

pub use crate::config::{SimscanConfig, DEFAULT_THRESHOLD};
pub use crate::store::{FingerprintStore, ProcessedDocument, ProcessingStatus};

pub use canonical::{
    collapse_whitespace, normalize, NormalizeConfig, NormalizeError, NormalizedText,
};
pub use fingerprint::{
    generate, hash_kgram, Fingerprint, FingerprintConfig, FingerprintError, FingerprintMeta,
    FingerprintSet, Span,
};
pub use ingest::{
    ingest, IngestConfig, IngestError, PlainTextExtractor, RawSubmission, Submission,
    SubmissionContent, SubmissionMetadata, SubmissionPayload, TextExtractor,
};
pub use matcher::{
    build_report, compare, AssignmentMeta, ComparisonResult, MatchConfig, MatchError,
    MatchSegment, Report, SubmissionId,
};

use chrono::Utc;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from running a record through the pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    #[error("ingest failure: {0}")]
    Ingest(#[from] IngestError),
    #[error("normalization failure: {0}")]
    Normalize(#[from] NormalizeError),
    #[error("fingerprinting failure: {0}")]
    Fingerprint(#[from] FingerprintError),
    #[error("matching failure: {0}")]
    Match(#[from] MatchError),
    #[error("invalid pipeline config: {0}")]
    Config(String),
}

/// Normalize, fingerprint, and store one submission's text.
///
/// Empty or shorter-than-k text is not an error: it fingerprints to an
/// empty set and is recorded as completed.
pub fn process_text(
    submission_id: impl Into<SubmissionId>,
    raw_text: &str,
    cfg: &SimscanConfig,
    store: &FingerprintStore,
) -> Result<ProcessedDocument, PipelineError> {
    let submission_id = submission_id.into();
    let doc = normalize(raw_text, &cfg.normalize);
    let fingerprints = generate(&doc, &cfg.fingerprint)?;

    debug!(
        submission_id = %submission_id,
        words = doc.word_count(),
        fingerprints = fingerprints.len(),
        "submission processed"
    );

    let record = ProcessedDocument {
        submission_id,
        content_hash: doc.sha256_hex().to_string(),
        fingerprints: Some(fingerprints),
        status: ProcessingStatus::Completed,
        processed_at: Utc::now(),
    };
    store.insert(record.clone());
    Ok(record)
}

/// Run a raw submission record end to end: ingest, extract, fingerprint.
///
/// Extraction failures are recorded in the store as failed documents and
/// returned as errors, so a later report names the submission in its
/// incomplete pairs instead of silently omitting it.
pub fn process_submission(
    raw: RawSubmission,
    extractor: &dyn TextExtractor,
    cfg: &SimscanConfig,
    store: &FingerprintStore,
) -> Result<ProcessedDocument, PipelineError> {
    let submission = ingest(raw, &cfg.ingest)?;
    let submission_id = submission.submission_id;

    let text = match submission.content {
        SubmissionContent::Text(text) => text,
        SubmissionContent::Document { filename, bytes } => {
            match extractor.extract_text(&filename, &bytes) {
                Ok(text) => text,
                Err(err) => {
                    store.insert(ProcessedDocument {
                        submission_id: submission_id.clone(),
                        content_hash: String::new(),
                        fingerprints: None,
                        status: ProcessingStatus::Failed {
                            error: err.to_string(),
                        },
                        processed_at: Utc::now(),
                    });
                    return Err(err.into());
                }
            }
        }
    };

    process_text(submission_id, &text, cfg, store)
}

/// Process a batch of independent submissions in parallel.
///
/// Results come back in input order, one per record; a failure in one
/// submission does not abort the rest.
pub fn process_batch(
    raws: Vec<RawSubmission>,
    extractor: &dyn TextExtractor,
    cfg: &SimscanConfig,
    store: &FingerprintStore,
) -> Vec<Result<ProcessedDocument, PipelineError>> {
    let total = raws.len();
    let results: Vec<_> = raws
        .into_par_iter()
        .map(|raw| process_submission(raw, extractor, cfg, store))
        .collect();

    let completed = results.iter().filter(|r| r.is_ok()).count();
    info!(total, completed, "submission batch processed");
    results
}

/// Compare two stored submissions.
///
/// A missing or failed record maps to
/// [`MatchError::MissingFingerprints`] for that submission.
pub fn compare_pair(
    source_id: &str,
    target_id: &str,
    store: &FingerprintStore,
    cfg: &SimscanConfig,
) -> Result<ComparisonResult, PipelineError> {
    let source = stored_fingerprints(source_id, store)?;
    let target = stored_fingerprints(target_id, store)?;
    Ok(compare(source_id, &source, target_id, &target, &cfg.matcher)?)
}

fn stored_fingerprints(
    submission_id: &str,
    store: &FingerprintStore,
) -> Result<FingerprintSet, PipelineError> {
    store
        .fingerprints(submission_id)
        .ok_or_else(|| MatchError::MissingFingerprints {
            submission_id: submission_id.to_string(),
        })
        .map_err(PipelineError::from)
}

/// Build the full similarity report for an assignment.
///
/// Resolves each id through the store; submissions without completed
/// fingerprints stay in the report's `incomplete_pairs` rather than
/// failing the whole run.
pub fn generate_report(
    meta: &AssignmentMeta,
    submission_ids: &[SubmissionId],
    store: &FingerprintStore,
    cfg: &SimscanConfig,
) -> Result<Report, PipelineError> {
    let resolved: Vec<(SubmissionId, Option<FingerprintSet>)> = submission_ids
        .iter()
        .map(|id| (id.clone(), store.fingerprints(id)))
        .collect();

    let view: Vec<(SubmissionId, Option<&FingerprintSet>)> = resolved
        .iter()
        .map(|(id, set)| (id.clone(), set.as_ref()))
        .collect();

    Ok(build_report(meta, &view, &cfg.matcher)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> AssignmentMeta {
        AssignmentMeta {
            assignment_id: "essay-1".into(),
            title: "Essay 1".into(),
            deadline: Utc::now(),
            plagiarism_threshold: DEFAULT_THRESHOLD,
        }
    }

    const FOX: &str = "The quick brown fox jumps over the lazy dog";

    #[test]
    fn process_text_stores_a_completed_record() {
        let cfg = SimscanConfig::default();
        let store = FingerprintStore::new();

        let record = process_text("s1", FOX, &cfg, &store).unwrap();
        assert!(record.is_completed());
        assert_eq!(record.fingerprints.as_ref().map(|f| f.len()), Some(5));
        assert_eq!(store.get("s1"), Some(record));
    }

    #[test]
    fn short_text_completes_with_empty_set() {
        let cfg = SimscanConfig::default();
        let store = FingerprintStore::new();

        let record = process_text("s1", "too short", &cfg, &store).unwrap();
        assert!(record.is_completed());
        assert_eq!(record.fingerprints.map(|f| f.len()), Some(0));
    }

    #[test]
    fn compare_pair_on_identical_text_scores_100() {
        let cfg = SimscanConfig::default();
        let store = FingerprintStore::new();
        process_text("s1", FOX, &cfg, &store).unwrap();
        process_text("s2", FOX, &cfg, &store).unwrap();

        let result = compare_pair("s1", "s2", &store, &cfg).unwrap();
        assert_eq!(result.score, 100.0);
        assert_eq!(result.segments.len(), 1);
    }

    #[test]
    fn compare_pair_with_unknown_id_fails() {
        let cfg = SimscanConfig::default();
        let store = FingerprintStore::new();
        process_text("s1", FOX, &cfg, &store).unwrap();

        let err = compare_pair("s1", "ghost", &store, &cfg).unwrap_err();
        assert_eq!(
            err,
            PipelineError::Match(MatchError::MissingFingerprints {
                submission_id: "ghost".into()
            })
        );
    }

    #[test]
    fn failed_extraction_leaves_a_failed_record() {
        let cfg = SimscanConfig::default();
        let store = FingerprintStore::new();
        let raw = RawSubmission {
            id: "s1".into(),
            metadata: SubmissionMetadata::default(),
            payload: Some(SubmissionPayload::Document {
                filename: "essay.pdf".into(),
                bytes: vec![1, 2, 3],
            }),
        };

        let err = process_submission(raw, &PlainTextExtractor::new(), &cfg, &store).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Ingest(IngestError::UnsupportedFormat { .. })
        ));

        let record = store.get("s1").expect("failed record stored");
        assert!(matches!(record.status, ProcessingStatus::Failed { .. }));
        assert!(record.fingerprints.is_none());
    }

    #[test]
    fn batch_processing_is_order_preserving() {
        let cfg = SimscanConfig::default();
        let store = FingerprintStore::new();
        let raws: Vec<RawSubmission> = (0..8)
            .map(|i| RawSubmission {
                id: format!("s{i}"),
                metadata: SubmissionMetadata::default(),
                payload: Some(SubmissionPayload::Text(format!(
                    "submission number {i} with some shared boilerplate text"
                ))),
            })
            .collect();

        let results = process_batch(raws, &PlainTextExtractor::new(), &cfg, &store);
        assert_eq!(results.len(), 8);
        for (i, result) in results.iter().enumerate() {
            let record = result.as_ref().expect("batch item succeeds");
            assert_eq!(record.submission_id, format!("s{i}"));
        }
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn report_flags_unprocessed_submissions() {
        let cfg = SimscanConfig::default();
        let store = FingerprintStore::new();
        process_text("s1", FOX, &cfg, &store).unwrap();
        process_text("s2", FOX, &cfg, &store).unwrap();

        let ids = vec!["s1".to_string(), "s2".to_string(), "ghost".to_string()];
        let report = generate_report(&meta(), &ids, &store, &cfg).unwrap();

        assert_eq!(report.total_submissions, 3);
        assert_eq!(report.comparisons.len(), 1);
        assert_eq!(report.incomplete_pairs.len(), 2);
        assert_eq!(report.comparisons[0].score, 100.0);
    }
}
