//! Whitespace normalization utility.

/// Collapse repeated whitespace to single ASCII spaces and trim both ends.
///
/// Deterministic; useful for callers that need whitespace-normalized text
/// without running the full canonical pipeline.
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
