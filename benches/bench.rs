//! Criterion benchmarks for the civility classification pipeline:
//! - Text normalization
//! - Heuristic rule checks
//! - Single-comment classification (heuristic path and model path)
//! - Batch classification

use std::collections::HashMap;
use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use civility::analysis::TextNormalizer;
use civility::features::TfIdfVectorizer;
use civility::model::{ClassifierModel, LabelSet, LogisticConfig, MultiLabelClassifier};
use civility::pipeline::{ArtifactMetadata, ClassifierArtifact, CommentClassifier};
use civility::rules::RuleEngine;

/// Generate comment-like documents for benchmarking.
fn generate_comments(count: usize) -> Vec<String> {
    let phrases = [
        "thanks for the clear explanation",
        "this was boring and useless",
        "you are a complete fool",
        "love every upload you make",
        "great work keep it up",
        "nobody wants you here",
        "very helpful walkthrough indeed",
        "what a waste of my time",
    ];
    (0..count)
        .map(|i| format!("{} number {}", phrases[i % phrases.len()], i))
        .collect()
}

fn fixture_classifier() -> CommentClassifier {
    let corpus = generate_comments(64);
    let mut vectorizer = TfIdfVectorizer::new();
    vectorizer.fit(&corpus).unwrap();
    let vectors: Vec<_> = corpus.iter().map(|doc| vectorizer.transform(doc)).collect();
    let labels: Vec<LabelSet> = (0..corpus.len())
        .map(|i| {
            let mut flags = [0u8; 6];
            flags[i % 6] = (i % 3 == 0) as u8;
            LabelSet::from_flags(flags)
        })
        .collect();
    let model = MultiLabelClassifier::fit(&vectors, &labels, &LogisticConfig::default());

    CommentClassifier::new(ClassifierArtifact {
        vectorizer,
        model: ClassifierModel::MultiLabel(model),
        metadata: ArtifactMetadata {
            trained_at: chrono::Utc::now(),
            training_examples: 64,
            test_examples: 0,
            validation_metrics: HashMap::new(),
        },
    })
}

fn bench_normalization(c: &mut Criterion) {
    let normalizer = TextNormalizer::new();
    let comment = "Check THIS out!! http://spam.example/watch?v=123 so GOOD :) :)";

    c.bench_function("normalize_comment", |b| {
        b.iter(|| normalizer.normalize(black_box(comment)))
    });
}

fn bench_rules(c: &mut Criterion) {
    let rules = RuleEngine::new();
    let text = "honestly this explanation made everything click for me";

    c.bench_function("rule_checks", |b| {
        b.iter(|| {
            let text = black_box(text);
            (
                rules.is_invalid(text),
                rules.contains_abuse(text),
                rules.is_negative(text),
            )
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    let classifier = fixture_classifier();

    // Short-circuits before feature extraction.
    c.bench_function("classify_heuristic_path", |b| {
        b.iter(|| classifier.classify(black_box("you stupid fool")))
    });

    // Full path through the vectorizer and all six estimators.
    c.bench_function("classify_model_path", |b| {
        b.iter(|| classifier.classify(black_box("thanks for the clear explanation number 3")))
    });
}

fn bench_classify_batch(c: &mut Criterion) {
    let classifier = fixture_classifier();
    let comments = generate_comments(1000);

    let mut group = c.benchmark_group("classify_batch");
    group.throughput(Throughput::Elements(comments.len() as u64));
    group.bench_function("1000_comments", |b| {
        b.iter(|| classifier.classify_batch(black_box(&comments)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_normalization,
    bench_rules,
    bench_classify,
    bench_classify_batch
);
criterion_main!(benches);
