//! In-memory document fingerprint store.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fingerprint::FingerprintSet;
use matcher::SubmissionId;

/// Outcome of processing one submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProcessingStatus {
    Completed,
    /// Processing failed; the message is the stage error's display form.
    Failed { error: String },
}

/// The stored record for one processed submission.
///
/// Written wholesale: reprocessing a submission replaces the record, there
/// are no incremental fingerprint updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessedDocument {
    pub submission_id: SubmissionId,
    /// SHA-256 of the normalized text, empty for failed records. Identifies
    /// the exact content the fingerprints were derived from.
    pub content_hash: String,
    /// `None` when processing failed.
    pub fingerprints: Option<FingerprintSet>,
    pub status: ProcessingStatus,
    pub processed_at: DateTime<Utc>,
}

impl ProcessedDocument {
    pub fn is_completed(&self) -> bool {
        matches!(self.status, ProcessingStatus::Completed)
    }
}

/// Concurrent map from submission id to its processed record.
///
/// Reads clone an immutable snapshot out, so report generation can run over
/// many submissions while new ones are being processed. A poisoned lock is
/// recovered rather than propagated; the map is only ever mutated by whole
/// record insertion, so a panicking writer cannot leave a record half
/// written.
#[derive(Debug, Default)]
pub struct FingerprintStore {
    inner: RwLock<HashMap<SubmissionId, ProcessedDocument>>,
}

impl FingerprintStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for a submission.
    pub fn insert(&self, record: ProcessedDocument) {
        let mut map = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        map.insert(record.submission_id.clone(), record);
    }

    /// Snapshot of one submission's record.
    pub fn get(&self, submission_id: &str) -> Option<ProcessedDocument> {
        self.read_map().get(submission_id).cloned()
    }

    /// Fingerprints of a completed submission, `None` for missing or
    /// failed records.
    pub fn fingerprints(&self, submission_id: &str) -> Option<FingerprintSet> {
        self.read_map()
            .get(submission_id)
            .and_then(|record| record.fingerprints.clone())
    }

    pub fn remove(&self, submission_id: &str) -> Option<ProcessedDocument> {
        let mut map = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        map.remove(submission_id)
    }

    pub fn len(&self) -> usize {
        self.read_map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_map().is_empty()
    }

    /// All stored submission ids, in no particular order.
    pub fn submission_ids(&self) -> Vec<SubmissionId> {
        self.read_map().keys().cloned().collect()
    }

    fn read_map(&self) -> std::sync::RwLockReadGuard<'_, HashMap<SubmissionId, ProcessedDocument>> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(id: &str) -> ProcessedDocument {
        ProcessedDocument {
            submission_id: id.to_string(),
            content_hash: format!("hash-{id}"),
            fingerprints: None,
            status: ProcessingStatus::Completed,
            processed_at: Utc::now(),
        }
    }

    #[test]
    fn insert_then_get_roundtrips() {
        let store = FingerprintStore::new();
        store.insert(completed("s1"));
        let record = store.get("s1").expect("record stored");
        assert_eq!(record.submission_id, "s1");
        assert!(record.is_completed());
        assert!(store.get("s2").is_none());
    }

    #[test]
    fn insert_replaces_wholesale() {
        let store = FingerprintStore::new();
        store.insert(completed("s1"));
        let mut replacement = completed("s1");
        replacement.content_hash = "hash-new".into();
        store.insert(replacement);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("s1").unwrap().content_hash, "hash-new");
    }

    #[test]
    fn failed_record_yields_no_fingerprints() {
        let store = FingerprintStore::new();
        let mut record = completed("s1");
        record.status = ProcessingStatus::Failed {
            error: "extraction failed".into(),
        };
        store.insert(record);

        assert!(store.get("s1").is_some());
        assert!(store.fingerprints("s1").is_none());
    }

    #[test]
    fn remove_returns_the_record() {
        let store = FingerprintStore::new();
        store.insert(completed("s1"));
        assert!(store.remove("s1").is_some());
        assert!(store.is_empty());
        assert!(store.remove("s1").is_none());
    }

    #[test]
    fn submission_ids_lists_all() {
        let store = FingerprintStore::new();
        store.insert(completed("s1"));
        store.insert(completed("s2"));
        let mut ids = store.submission_ids();
        ids.sort();
        assert_eq!(ids, vec!["s1".to_string(), "s2".to_string()]);
    }
}
