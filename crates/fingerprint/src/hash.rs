//! Rolling hash over k-gram text.

/// Base for the polynomial rolling hash. A small prime: this hash is a
/// locality-sensitive identity check, not a cryptographic digest.
const BASE: u64 = 101;

/// Hash a k-gram's text with a polynomial rolling hash.
///
/// `h = h * 101 + code(ch)` over the char scalar values, with natural u64
/// wraparound standing in for a 2^64 modulus. Wraparound is defined behavior
/// and intentional. Collisions between distinct texts are rare and are
/// treated as genuine matches downstream — an accepted approximation. Do not
/// swap in a cryptographic hash: k-grams are hashed whole, so that would
/// change collision resistance without changing the matching semantics.
pub fn hash_kgram(text: &str) -> u64 {
    let mut hash = 0u64;
    for ch in text.chars() {
        hash = hash.wrapping_mul(BASE).wrapping_add(ch as u64);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(hash_kgram("one two three"), hash_kgram("one two three"));
    }

    #[test]
    fn known_value_single_char() {
        // Base case: a single character hashes to its scalar value.
        assert_eq!(hash_kgram("a"), 'a' as u64);
    }

    #[test]
    fn known_value_two_chars() {
        assert_eq!(hash_kgram("ab"), ('a' as u64) * 101 + 'b' as u64);
    }

    #[test]
    fn empty_text_hashes_to_zero() {
        assert_eq!(hash_kgram(""), 0);
    }

    #[test]
    fn distinct_texts_usually_differ() {
        assert_ne!(hash_kgram("the quick brown"), hash_kgram("the quick crown"));
        assert_ne!(hash_kgram("ab"), hash_kgram("ba"));
    }

    #[test]
    fn long_text_wraps_without_panicking() {
        let long = "word ".repeat(10_000);
        // Total arithmetic: wraparound is the modulus.
        let _ = hash_kgram(&long);
    }
}
