//! Command implementations for the civility CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::pipeline::{ClassifierArtifact, CommentClassifier};
use crate::training::{Trainer, TrainerConfig, TrainingMode};

/// Execute a CLI command.
pub fn execute_command(args: CivilityArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::ClassifyBatch(batch_args) => classify_batch(batch_args.clone(), &args),
    }
}

/// Train a classifier and report held-out metrics.
fn train(args: TrainArgs, cli_args: &CivilityArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Training from: {}", args.dataset.display());
    }

    let mode = match args.mode {
        ModeArg::Multi => TrainingMode::MultiLabel,
        ModeArg::Single => TrainingMode::SingleLabel,
    };
    let trainer = Trainer::with_config(TrainerConfig {
        model_dir: args.model_dir.clone(),
        mode,
        test_ratio: args.test_ratio,
        seed: args.seed,
        ..TrainerConfig::default()
    });

    let report = trainer.train(&args.dataset)?;

    output_result(
        "Training complete",
        &TrainingResult {
            model_dir: args.model_dir.to_string_lossy().to_string(),
            mode: match mode {
                TrainingMode::MultiLabel => "multi-label".to_string(),
                TrainingMode::SingleLabel => "single-label".to_string(),
            },
            training_examples: report.training_examples,
            test_examples: report.test_examples,
            per_label: report.per_label,
        },
        cli_args,
    )
}

/// Classify one comment with a previously trained artifact.
fn classify(args: ClassifyArgs, cli_args: &CivilityArgs) -> Result<()> {
    let artifact = ClassifierArtifact::load(&args.model_dir)?;
    let classifier = CommentClassifier::new(artifact);

    let classification = classifier.classify(&args.text);

    output_result(
        "",
        &ClassificationResult {
            comment: args.text,
            labels: classification
                .tokens()
                .into_iter()
                .map(|t| t.to_string())
                .collect(),
        },
        cli_args,
    )
}

/// Classify a file of comments, one per line.
fn classify_batch(args: ClassifyBatchArgs, cli_args: &CivilityArgs) -> Result<()> {
    let artifact = ClassifierArtifact::load(&args.model_dir)?;
    let classifier = CommentClassifier::new(artifact);

    let reader = BufReader::new(File::open(&args.input)?);
    let comments: Vec<String> = reader.lines().collect::<std::io::Result<_>>()?;

    let classifications = classifier.classify_batch(&comments);
    let results: Vec<ClassificationResult> = comments
        .into_iter()
        .zip(classifications)
        .map(|(comment, classification)| ClassificationResult {
            comment,
            labels: classification
                .tokens()
                .into_iter()
                .map(|t| t.to_string())
                .collect(),
        })
        .collect();

    let total = results.len();
    output_result("", &BatchResult { results, total }, cli_args)
}
