//! End-to-end scenarios: train on a small dataset, reload the artifact,
//! and classify through the public entry point.

use std::io::Write;
use std::path::Path;

use civility::pipeline::{ClassifierArtifact, CommentClassifier};
use civility::rules::{Lexicon, RuleEngine};
use civility::training::{Trainer, TrainerConfig, TrainingMode};

fn fixture_dataset() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut rows = String::from("comment,insult,threat,hate,harassment,love,support\n");
    let examples: [(&str, [u8; 6]); 12] = [
        ("you are an utter fool", [1, 0, 0, 0, 0, 0]),
        ("what a fool you turned out to be", [1, 0, 0, 0, 0, 0]),
        ("i will find you and hurt you", [0, 1, 0, 0, 0, 0]),
        ("i will make you regret this", [0, 1, 0, 0, 0, 0]),
        ("people like you are vermin", [0, 0, 1, 0, 0, 0]),
        ("your kind does not belong here", [0, 0, 1, 0, 0, 0]),
        ("nobody wants you here just leave", [0, 0, 0, 1, 0, 0]),
        ("everyone report this clown account", [0, 0, 0, 1, 0, 0]),
        ("i love this channel so much", [0, 0, 0, 0, 1, 0]),
        ("love every upload you make", [0, 0, 0, 0, 1, 0]),
        ("great work keep it up", [0, 0, 0, 0, 0, 1]),
        ("thanks for the clear explanation", [0, 0, 0, 0, 0, 0]),
    ];
    for (comment, flags) in examples {
        rows.push_str(&format!(
            "{},{}\n",
            comment,
            flags.map(|f| f.to_string()).join(",")
        ));
    }
    file.write_all(rows.as_bytes()).unwrap();
    file
}

fn trained_classifier(model_dir: &Path, mode: TrainingMode) -> CommentClassifier {
    trained_classifier_with_ratio(model_dir, mode, 0.2)
}

/// Model-dependent assertions train on every fixture row (ratio 0.0) so the
/// probed comments are guaranteed to have been seen at fit time.
fn trained_classifier_with_ratio(
    model_dir: &Path,
    mode: TrainingMode,
    test_ratio: f64,
) -> CommentClassifier {
    let dataset = fixture_dataset();
    let trainer = Trainer::with_config(TrainerConfig {
        model_dir: model_dir.to_path_buf(),
        mode,
        test_ratio,
        ..TrainerConfig::default()
    });
    trainer.train(dataset.path()).unwrap();

    let artifact = ClassifierArtifact::load(model_dir).unwrap();
    CommentClassifier::new(artifact)
}

#[test]
fn scenario_abusive_comment_is_toxic() {
    let dir = tempfile::tempdir().unwrap();
    // "harm" added to the abuse lexicon for this deployment.
    let classifier = trained_classifier(dir.path(), TrainingMode::MultiLabel).with_rules(
        RuleEngine::with_lexicon(Lexicon::with_words(
            vec!["harm", "idiot", "stupid"],
            vec!["boring", "useless", "worst"],
        )),
    );

    assert_eq!(classifier.classify("I will harm you").tokens(), ["Toxic"]);
}

#[test]
fn scenario_digits_are_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = trained_classifier(dir.path(), TrainingMode::MultiLabel);

    assert_eq!(classifier.classify("12345").tokens(), ["Invalid"]);
}

#[test]
fn scenario_plain_thanks_is_safe() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = trained_classifier_with_ratio(dir.path(), TrainingMode::MultiLabel, 0.0);

    assert_eq!(
        classifier.classify("Thanks for the explanation").tokens(),
        ["Safe"]
    );
}

#[test]
fn scenario_negative_without_abuse() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = trained_classifier(dir.path(), TrainingMode::MultiLabel);

    assert_eq!(
        classifier.classify("This was boring and useless").tokens(),
        ["Negative"]
    );
}

#[test]
fn invalid_beats_every_other_signal() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = trained_classifier(dir.path(), TrainingMode::MultiLabel);

    // Nothing analyzable survives normalization for any of these.
    assert_eq!(classifier.classify("").tokens(), ["Invalid"]);
    assert_eq!(classifier.classify("!!").tokens(), ["Invalid"]);
    assert_eq!(classifier.classify("12:34").tokens(), ["Invalid"]);
}

#[test]
fn abuse_beats_negative_and_model() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = trained_classifier(dir.path(), TrainingMode::MultiLabel);

    assert_eq!(
        classifier
            .classify("you stupid idiot, this boring video is the worst")
            .tokens(),
        ["Toxic"]
    );
}

#[test]
fn classify_never_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = trained_classifier(dir.path(), TrainingMode::MultiLabel);

    for comment in [
        "",
        " ",
        "👍",
        "12345",
        "fine",
        "i love this channel so much",
        "some words the model never saw during training",
    ] {
        assert!(!classifier.classify(comment).labels().is_empty());
    }
}

#[test]
fn classify_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = trained_classifier(dir.path(), TrainingMode::MultiLabel);

    for comment in ["great work", "you fool", "This was boring", "12345"] {
        let first = classifier.classify(comment);
        for _ in 0..3 {
            assert_eq!(classifier.classify(comment), first);
        }
    }
}

#[test]
fn multi_label_round_trip_recovers_flags() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = trained_classifier_with_ratio(dir.path(), TrainingMode::MultiLabel, 0.0);

    // A training row with no heuristic trigger: the model must recover at
    // least one of its true labels.
    let result = classifier.classify("i love this channel so much");
    assert!(result.tokens().contains(&"Love") || result.is_safe());

    let result = classifier.classify("people like you are vermin");
    assert!(
        !result.is_safe(),
        "training row with abusive flags classified Safe: {result}"
    );
}

#[test]
fn single_label_mode_classifies_toxic_and_safe() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = trained_classifier_with_ratio(dir.path(), TrainingMode::SingleLabel, 0.0);

    assert_eq!(
        classifier.classify("people like you are vermin").tokens(),
        ["Toxic"]
    );
    assert_eq!(
        classifier.classify("thanks for the clear explanation").tokens(),
        ["Safe"]
    );
    // Negative still comes from the heuristic in single-label mode.
    assert_eq!(
        classifier.classify("This was boring and useless").tokens(),
        ["Negative"]
    );
}

#[test]
fn batch_classification_matches_sequential() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = trained_classifier(dir.path(), TrainingMode::MultiLabel);

    let comments: Vec<String> = [
        "great work keep it up",
        "12345",
        "you stupid fool",
        "This was boring and useless",
        "",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let batch = classifier.classify_batch(&comments);
    assert_eq!(batch.len(), comments.len());
    for (comment, result) in comments.iter().zip(&batch) {
        assert_eq!(result, &classifier.classify(comment));
    }
}
