use std::hint::black_box;

use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};
use simscan::{
    generate, generate_report, normalize, process_text, AssignmentMeta, FingerprintStore,
    SimscanConfig,
};

/// Deterministic pseudo-essay: enough distinct words for a realistic
/// fingerprint set, with repeated phrases so comparisons find overlap.
fn synthetic_text(seed: u64, words: usize) -> String {
    const VOCAB: &[&str] = &[
        "analysis", "argument", "because", "chapter", "concludes", "context", "data",
        "describes", "evidence", "however", "method", "moreover", "observed", "process",
        "research", "result", "section", "shows", "study", "therefore", "thesis", "value",
    ];
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut out = String::with_capacity(words * 8);
    for i in 0..words {
        if i > 0 {
            out.push(' ');
        }
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        out.push_str(VOCAB[(state >> 33) as usize % VOCAB.len()]);
    }
    out
}

fn normalize_bench(c: &mut Criterion) {
    let cfg = SimscanConfig::default();
    let text = synthetic_text(1, 5_000);
    c.bench_function("normalize_5k_words", |b| {
        b.iter(|| {
            let doc = normalize(black_box(&text), &cfg.normalize);
            black_box(doc);
        });
    });
}

fn fingerprint_bench(c: &mut Criterion) {
    let cfg = SimscanConfig::default();
    let doc = normalize(&synthetic_text(1, 5_000), &cfg.normalize);
    c.bench_function("fingerprint_5k_words", |b| {
        b.iter(|| {
            let set = generate(black_box(&doc), &cfg.fingerprint).unwrap();
            black_box(set);
        });
    });
}

fn report_bench(c: &mut Criterion) {
    let cfg = SimscanConfig::default();
    let store = FingerprintStore::new();
    let ids: Vec<String> = (0..30).map(|i| format!("s{i}")).collect();
    for (i, id) in ids.iter().enumerate() {
        let text = synthetic_text(i as u64 % 7, 1_000);
        process_text(id.clone(), &text, &cfg, &store).unwrap();
    }
    let meta = AssignmentMeta {
        assignment_id: "bench".into(),
        title: "Benchmark Assignment".into(),
        deadline: Utc::now(),
        plagiarism_threshold: 30,
    };

    c.bench_function("report_30_submissions_1k_words", |b| {
        b.iter(|| {
            let report = generate_report(&meta, black_box(&ids), &store, &cfg).unwrap();
            black_box(report);
        });
    });
}

criterion_group!(benches, normalize_bench, fingerprint_bench, report_bench);
criterion_main!(benches);
