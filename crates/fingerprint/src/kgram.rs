//! K-gram extraction over a canonical word sequence.
//!
//! A k-gram is a window of `k` consecutive words joined with single spaces,
//! tagged with the word-index span it covers. Extraction runs in O(n·k) over
//! the number of words and is fully deterministic.

use serde::{Deserialize, Serialize};

use crate::types::Span;

/// One k-word window over the document, before hashing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KGram {
    /// The k words joined with single spaces.
    pub text: String,
    /// Word-index span `[start, end)`; `end - start == k`.
    pub span: Span,
}

/// Slide a k-word window over `words`, emitting one [`KGram`] per start
/// index from `0` to `len - k` inclusive.
///
/// Returns an empty vector when `k == 0` or the document has fewer than `k`
/// words; the caller treats that as a valid short-document outcome.
pub fn kgrams<S: AsRef<str>>(words: &[S], k: usize) -> Vec<KGram> {
    let n = words.len();
    if k == 0 || n < k {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n - k + 1);
    for i in 0..=n - k {
        let mut text = String::new();
        for (j, word) in words[i..i + k].iter().enumerate() {
            if j > 0 {
                text.push(' ');
            }
            text.push_str(word.as_ref());
        }
        out.push(KGram {
            text,
            span: Span::new(i, i + k),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_words() {
        let words: Vec<&str> = vec![];
        assert!(kgrams(&words, 3).is_empty());
    }

    #[test]
    fn k_zero() {
        assert!(kgrams(&["a", "b", "c"], 0).is_empty());
    }

    #[test]
    fn fewer_words_than_k() {
        assert!(kgrams(&["a", "b"], 3).is_empty());
    }

    #[test]
    fn exactly_k_words() {
        let grams = kgrams(&["a", "b", "c"], 3);
        assert_eq!(grams.len(), 1);
        assert_eq!(grams[0].text, "a b c");
        assert_eq!(grams[0].span, Span::new(0, 3));
    }

    #[test]
    fn count_is_n_minus_k_plus_one() {
        let words = ["a", "b", "c", "d", "e"];
        let grams = kgrams(&words, 3);
        assert_eq!(grams.len(), 3);
        assert_eq!(grams[0].text, "a b c");
        assert_eq!(grams[1].text, "b c d");
        assert_eq!(grams[2].text, "c d e");
    }

    #[test]
    fn spans_are_well_formed() {
        let words = ["w0", "w1", "w2", "w3", "w4", "w5"];
        for gram in kgrams(&words, 4) {
            assert!(gram.span.start < gram.span.end);
            assert_eq!(gram.span.len(), 4);
        }
    }

    #[test]
    fn single_word_k1() {
        let grams = kgrams(&["hello"], 1);
        assert_eq!(grams.len(), 1);
        assert_eq!(grams[0].text, "hello");
        assert_eq!(grams[0].span, Span::new(0, 1));
    }

    #[test]
    fn accepts_owned_strings() {
        let words: Vec<String> = vec!["one".into(), "two".into(), "three".into()];
        assert_eq!(kgrams(&words, 2).len(), 2);
    }
}
