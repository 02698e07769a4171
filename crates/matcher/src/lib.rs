//! Simscan matching layer: pairwise fingerprint comparison and
//! assignment-level reporting.
//!
//! Two independent computations combine into one comparison result:
//!
//! - **Segments** (positional/sequential view): hash collisions between the
//!   two fingerprint sets, scanned in target document order and consolidated
//!   into contiguous matching passages for human-facing highlighting.
//! - **Score** (set-based view): Jaccard similarity over the two hash sets,
//!   scaled to `[0, 100]`, used for thresholding.
//!
//! The two views are computed from the same hash data but are not required
//! to agree exactly; with generator-produced fingerprints they are
//! consistent in practice.
//!
//! The report aggregator runs the comparator over every unordered pair of an
//! assignment's submissions — n·(n-1)/2 comparisons, O(n²) in submission
//! count and recomputed per report request. Pairs are independent and are
//! compared in parallel.

mod engine;
mod report;
mod types;

pub use crate::engine::{compare, matching_segments, similarity_score, HashIndex};
pub use crate::report::{build_report, round2, AssignmentMeta, Report};
pub use crate::types::{ComparisonResult, MatchConfig, MatchError, MatchSegment, SubmissionId};
