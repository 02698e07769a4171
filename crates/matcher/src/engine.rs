//! The pairwise comparison engine.

use std::collections::HashMap;

use fingerprint::{Fingerprint, FingerprintSet};

use crate::types::{ComparisonResult, MatchConfig, MatchError, MatchSegment, SubmissionId};


/// Hash → fingerprint lookup over one document's fingerprint set.
///
/// When a hash occurs more than once in the source document, the **last**
/// occurrence wins: later insertions overwrite earlier ones, matching the
/// original system's behavior. On heavily repetitive text the reported
/// source span is therefore the rightmost occurrence of the k-gram, and a
/// later raw match can then sit to the *left* of the running segment's
/// source span; merging such a pair drags the segment's source end
/// backwards and can emit a start > end source span. Source hashes are
/// effectively unique for a reasonable k, so this is a policy for a rare
/// case, not a hot path.
pub struct HashIndex<'a> {
    map: HashMap<u64, &'a Fingerprint>,
}

impl<'a> HashIndex<'a> {
    /// Build the lookup from a fingerprint set, in document order.
    pub fn build(set: &'a FingerprintSet) -> Self {
        let mut map = HashMap::with_capacity(set.len());
        for fp in set {
            map.insert(fp.hash, fp);
        }
        Self { map }
    }

    pub fn get(&self, hash: u64) -> Option<&'a Fingerprint> {
        self.map.get(&hash).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Compare two fingerprint sets and produce the full comparison result.
///
/// Validates the config, then combines [`matching_segments`] and
/// [`similarity_score`]. Symmetric in score; swapping the arguments swaps
/// each segment's source/target spans.
pub fn compare(
    source_id: impl Into<SubmissionId>,
    source: &FingerprintSet,
    target_id: impl Into<SubmissionId>,
    target: &FingerprintSet,
    cfg: &MatchConfig,
) -> Result<ComparisonResult, MatchError> {
    cfg.validate()?;
    Ok(ComparisonResult {
        source_id: source_id.into(),
        target_id: target_id.into(),
        score: similarity_score(source, target),
        segments: matching_segments(source, target, cfg.max_gap),
    })
}

/// Find the consolidated matching segments between two fingerprint sets.
///
/// Scans target fingerprints in document order, looks each hash up in the
/// source index, and merges adjacent raw matches. Unmatched target
/// fingerprints are skipped; malformed spans (never produced by the
/// generator) are skipped as well rather than treated as errors.
pub fn matching_segments(
    source: &FingerprintSet,
    target: &FingerprintSet,
    max_gap: usize,
) -> Vec<MatchSegment> {
    let index = HashIndex::build(source);

    let raw = target.iter().filter_map(|target_fp| {
        let source_fp = index.get(target_fp.hash)?;
        if !source_fp.span.is_well_formed() || !target_fp.span.is_well_formed() {
            return None;
        }
        Some(MatchSegment {
            source_span: source_fp.span,
            target_span: target_fp.span,
            text: source_fp.text.clone(),
        })
    });

    consolidate(raw, max_gap)
}

/// Merge adjacent raw matches into larger segments, left to right.
///
/// Two consecutive matches merge when the gap between the first match's end
/// and the second match's start is at most `max_gap` k-grams in both the
/// source and target position spaces. Merging extends the running segment's
/// end bounds; it does not re-validate the intervening k-grams — small
/// interruptions inside a copied passage are deliberately bridged. Output
/// target spans are strictly increasing; source spans usually are too,
/// except for the duplicate-hash case noted on [`HashIndex`].
fn consolidate(
    raw: impl IntoIterator<Item = MatchSegment>,
    max_gap: usize,
) -> Vec<MatchSegment> {
    let mut consolidated = Vec::new();
    let mut current: Option<MatchSegment> = None;

    for next in raw {
        current = Some(match current.take() {
            None => next,
            Some(mut running) => {
                if adjacent(&running, &next, max_gap) {
                    running.source_span.end = next.source_span.end;
                    running.target_span.end = next.target_span.end;
                    running
                } else {
                    consolidated.push(running);
                    next
                }
            }
        });
    }

    if let Some(last) = current {
        consolidated.push(last);
    }
    consolidated
}

/// Adjacency predicate: `next` starts within `max_gap` of `running`'s end in
/// both position spaces. Overlapping matches always satisfy it.
fn adjacent(running: &MatchSegment, next: &MatchSegment, max_gap: usize) -> bool {
    next.source_span.start <= running.source_span.end.saturating_add(max_gap)
        && next.target_span.start <= running.target_span.end.saturating_add(max_gap)
}

/// Set-level Jaccard similarity over the two hash sets, scaled to
/// `[0, 100]`.
///
/// Independent of the positional segments. Defined as 0 when either
/// fingerprint set is empty (avoids dividing by zero) and when the union is
/// empty. The division is otherwise total; the clamp guards float edge
/// cases only.
pub fn similarity_score(source: &FingerprintSet, target: &FingerprintSet) -> f64 {
    if source.is_empty() || target.is_empty() {
        return 0.0;
    }

    let source_hashes = source.hash_set();
    let target_hashes = target.hash_set();

    let intersection = source_hashes.intersection(&target_hashes).count();
    let union = source_hashes.union(&target_hashes).count();
    if union == 0 {
        return 0.0;
    }

    (intersection as f64 / union as f64 * 100.0).clamp(0.0, 100.0)
}
