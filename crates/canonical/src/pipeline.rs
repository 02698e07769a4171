use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::document::NormalizedText;
use crate::hash::hash_canonical_bytes;

/// Normalize raw extracted text into its canonical form.
///
/// The transform is, in order:
///
/// 1. Unicode NFKC normalization (when `cfg.normalize_unicode` is set)
/// 2. Lowercasing
/// 3. Removal of every character that is not a word character
///    (alphanumeric or `_`) or whitespace
/// 4. Collapsing whitespace runs to single ASCII spaces, trimmed
///
/// Total and idempotent: every input string yields a valid
/// [`NormalizedText`], including the empty one.
pub fn normalize(raw: &str, cfg: &NormalizeConfig) -> NormalizedText {
    // NFKC first: it can change character boundaries, so everything else
    // must see the normalized stream.
    let unicode_normalized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(raw.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(raw)
    };

    let mut canonical = String::with_capacity(unicode_normalized.len());
    let mut pending_space = false;

    for ch in unicode_normalized.chars() {
        if ch.is_whitespace() {
            // Collapse: a run of whitespace becomes at most one pending space.
            if !canonical.is_empty() {
                pending_space = true;
            }
        } else if is_word_char(ch) {
            if pending_space {
                canonical.push(' ');
                pending_space = false;
            }
            // Lowercasing can expand one char into several (e.g. İ).
            for lower in ch.to_lowercase() {
                canonical.push(lower);
            }
        }
        // Everything else (punctuation, symbols) is dropped in place without
        // introducing a word boundary, mirroring a \w-or-whitespace filter.
    }

    let sha256_hex = hash_canonical_bytes(cfg.version, canonical.as_bytes());
    NormalizedText::new(canonical, cfg.version, sha256_hex)
}

/// Word characters are alphanumerics plus underscore.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
