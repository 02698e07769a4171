//! Assignment-level report aggregation.
//!
//! The aggregator runs the comparison engine over every unordered pair of an
//! assignment's submissions. This is the dominant cost of the whole system:
//! n·(n-1)/2 comparisons, O(n²) in submission count, recomputed from scratch
//! on every report request (no cross-request caching in the core). Pairs are
//! independent — each reads two immutable fingerprint sets — so the matrix
//! is evaluated on the rayon pool.

use chrono::{DateTime, Utc};
use fingerprint::FingerprintSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::{matching_segments, similarity_score};
use crate::types::{ComparisonResult, MatchConfig, MatchError, SubmissionId};

/// Assignment metadata the aggregator needs; ownership and persistence of
/// assignments live outside the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignmentMeta {
    pub assignment_id: String,
    pub title: String,
    pub deadline: DateTime<Utc>,
    /// Integer percent; pairs scoring strictly above it are counted as
    /// flagged.
    pub plagiarism_threshold: u32,
}

/// The aggregate similarity report for one assignment.
///
/// Ephemeral: regenerated on each request. Scores are rounded to two decimal
/// places for presentation; `average_similarity` and
/// `above_threshold_count` are computed from the full-precision values
/// before rounding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub assignment_id: String,
    pub title: String,
    pub deadline: DateTime<Utc>,
    pub total_submissions: usize,
    /// Mean of all pairwise scores, 0.0 when fewer than two submissions.
    pub average_similarity: f64,
    /// Pairs whose score strictly exceeds the assignment threshold.
    pub above_threshold_count: usize,
    /// Pairwise results ranked by score, descending. Ties keep pair
    /// iteration order, so output is deterministic.
    pub comparisons: Vec<ComparisonResult>,
    /// Pairs excluded because at least one side had no stored fingerprints.
    /// Surfaced explicitly rather than silently dropped.
    pub incomplete_pairs: Vec<(SubmissionId, SubmissionId)>,
    pub generated_at: DateTime<Utc>,
}

/// Round to two decimal places for presentation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build the pairwise similarity report for one assignment.
///
/// `submissions` pairs each submission id with its stored fingerprint set,
/// or `None` when processing has not completed. Every unordered pair with
/// both sets present is compared exactly once; a pair with a missing side is
/// excluded from the comparisons and recorded in
/// [`Report::incomplete_pairs`].
pub fn build_report(
    meta: &AssignmentMeta,
    submissions: &[(SubmissionId, Option<&FingerprintSet>)],
    cfg: &MatchConfig,
) -> Result<Report, MatchError> {
    cfg.validate()?;

    let n = submissions.len();
    let mut ready_pairs: Vec<((&SubmissionId, &FingerprintSet), (&SubmissionId, &FingerprintSet))> =
        Vec::with_capacity(n * n.saturating_sub(1) / 2);
    let mut incomplete_pairs = Vec::new();

    // Every unordered pair exactly once.
    for i in 0..n {
        for j in (i + 1)..n {
            let (ref source_id, source) = submissions[i];
            let (ref target_id, target) = submissions[j];
            if let (Some(source), Some(target)) = (source, target) {
                ready_pairs.push(((source_id, source), (target_id, target)));
            } else {
                warn!(
                    source = %source_id,
                    target = %target_id,
                    "skipping pair with unprocessed fingerprints"
                );
                incomplete_pairs.push((source_id.clone(), target_id.clone()));
            }
        }
    }

    debug!(
        assignment = %meta.assignment_id,
        submissions = n,
        pairs = ready_pairs.len(),
        "comparing all submission pairs"
    );

    let mut comparisons: Vec<ComparisonResult> = ready_pairs
        .par_iter()
        .map(|&((source_id, source), (target_id, target))| ComparisonResult {
            source_id: source_id.clone(),
            target_id: target_id.clone(),
            score: similarity_score(source, target),
            segments: matching_segments(source, target, cfg.max_gap),
        })
        .collect();

    // Aggregate over full-precision scores before any rounding.
    let pair_count = comparisons.len();
    let average_similarity = if pair_count == 0 {
        0.0
    } else {
        comparisons.iter().map(|c| c.score).sum::<f64>() / pair_count as f64
    };
    let above_threshold_count = comparisons
        .iter()
        .filter(|c| c.score > meta.plagiarism_threshold as f64)
        .count();

    // Rank by score, descending; stable sort keeps pair order on ties.
    comparisons.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for comparison in &mut comparisons {
        comparison.score = round2(comparison.score);
    }

    Ok(Report {
        assignment_id: meta.assignment_id.clone(),
        title: meta.title.clone(),
        deadline: meta.deadline,
        total_submissions: n,
        average_similarity: round2(average_similarity),
        above_threshold_count,
        comparisons,
        incomplete_pairs,
        generated_at: Utc::now(),
    })
}
