//! Equivalent inputs must produce identical fingerprints and scores,
//! across runs and across formatting differences the normalizer erases.

use simscan::{
    compare_pair, normalize, process_text, FingerprintStore, NormalizeConfig, SimscanConfig,
};

#[test]
fn formatting_variants_fingerprint_identically() {
    let cfg = SimscanConfig::default();
    let store = FingerprintStore::new();

    let a = process_text(
        "a",
        "  The QUICK   brown fox\tjumps over the lazy dog!  ",
        &cfg,
        &store,
    )
    .expect("first variant processes");
    let b = process_text(
        "b",
        "the quick brown fox jumps, over the lazy dog",
        &cfg,
        &store,
    )
    .expect("second variant processes");

    // Same content, different submission: hash and fingerprints agree in full.
    assert_eq!(a.content_hash, b.content_hash);
    assert_eq!(a.fingerprints, b.fingerprints);

    let result = compare_pair("a", "b", &store, &cfg).expect("comparison succeeds");
    assert_eq!(result.score, 100.0);
}

#[test]
fn reprocessing_is_stable() {
    let cfg = SimscanConfig::default();
    let store = FingerprintStore::new();
    let text = "plagiarism detection works on normalized word sequences not raw bytes";

    let first = process_text("s1", text, &cfg, &store).expect("first run");
    let second = process_text("s1", text, &cfg, &store).expect("second run");

    assert_eq!(first.content_hash, second.content_hash);
    assert_eq!(first.fingerprints, second.fingerprints);
    assert_eq!(store.len(), 1);
}

#[test]
fn normalization_is_idempotent_end_to_end() {
    let cfg = NormalizeConfig::default();
    for raw in [
        "Already normalized text here",
        "  MIXED Case,   punctuation!!  and\twhitespace ",
        "unicode café ﬁle naïve",
    ] {
        let once = normalize(raw, &cfg);
        let twice = normalize(once.as_str(), &cfg);
        assert_eq!(once.as_str(), twice.as_str());
        assert_eq!(once.sha256_hex(), twice.sha256_hex());
    }
}
