//! End-to-end training: load, split, fit, evaluate, persist.

use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::analysis::TextNormalizer;
use crate::error::{CivilityError, Result};
use crate::features::{TfIdfVectorizer, VectorizerConfig};
use crate::model::{
    ClassifierModel, LogisticConfig, ModerationLabel, MultiLabelClassifier, SingleLabelClassifier,
};
use crate::pipeline::{ArtifactMetadata, ClassifierArtifact};
use crate::training::dataset::{TrainingRecord, load_dataset};
use crate::training::metrics::{TrainingReport, evaluate_multi_label, evaluate_single_label};

/// Which classifier composition training produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrainingMode {
    /// Six independent binary estimators, one per flag.
    #[default]
    MultiLabel,
    /// One collapsed Toxic/Safe estimator.
    SingleLabel,
}

/// Configuration for [`Trainer`].
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    /// Directory the artifact pair is written into.
    pub model_dir: PathBuf,
    /// Classifier composition.
    pub mode: TrainingMode,
    /// Fraction of rows held out for evaluation.
    pub test_ratio: f64,
    /// Shuffle seed, fixed for reproducible splits.
    pub seed: u64,
    /// Feature extractor settings.
    pub vectorizer: VectorizerConfig,
    /// Estimator settings.
    pub logistic: LogisticConfig,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            model_dir: PathBuf::from("model"),
            mode: TrainingMode::MultiLabel,
            test_ratio: 0.2,
            seed: 42,
            vectorizer: VectorizerConfig::default(),
            logistic: LogisticConfig::default(),
        }
    }
}

/// The training pipeline.
///
/// Owns the only write path for classifier artifacts. The normalizer used
/// here is the same type the orchestrator uses at inference time, so the
/// two stages cannot drift apart.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    config: TrainerConfig,
    normalizer: TextNormalizer,
}

impl Trainer {
    /// Create a trainer with the default configuration.
    pub fn new() -> Self {
        Trainer::default()
    }

    /// Create a trainer with a custom configuration.
    pub fn with_config(config: TrainerConfig) -> Self {
        Trainer {
            config,
            normalizer: TextNormalizer::new(),
        }
    }

    /// Train on a labeled CSV dataset, persist the artifact pair, and
    /// return the evaluation report.
    pub fn train(&self, dataset_path: &Path) -> Result<TrainingReport> {
        let records = load_dataset(dataset_path)?;
        if records.is_empty() {
            return Err(CivilityError::dataset(format!(
                "{}: no usable rows after filtering",
                dataset_path.display()
            )));
        }
        info!("loaded {} usable rows", records.len());

        let normalized: Vec<TrainingRecord> = records
            .into_iter()
            .map(|record| TrainingRecord {
                comment: self.normalizer.normalize(&record.comment),
                labels: record.labels,
            })
            .collect();

        let (train_rows, test_rows) = self.split(normalized);
        info!(
            "split into {} training / {} held-out rows (seed {})",
            train_rows.len(),
            test_rows.len(),
            self.config.seed
        );

        let train_corpus: Vec<String> = train_rows.iter().map(|r| r.comment.clone()).collect();
        let mut vectorizer = TfIdfVectorizer::with_config(self.config.vectorizer.clone());
        vectorizer.fit(&train_corpus)?;
        info!("fitted vectorizer, {} features", vectorizer.vocabulary_size());

        let train_vectors: Vec<_> = train_rows
            .iter()
            .map(|r| vectorizer.transform(&r.comment))
            .collect();
        let train_labels: Vec<_> = train_rows.iter().map(|r| r.labels).collect();

        let model = match self.config.mode {
            TrainingMode::MultiLabel => ClassifierModel::MultiLabel(MultiLabelClassifier::fit(
                &train_vectors,
                &train_labels,
                &self.config.logistic,
            )),
            TrainingMode::SingleLabel => ClassifierModel::SingleLabel(SingleLabelClassifier::fit(
                &train_vectors,
                &train_labels,
                &self.config.logistic,
            )),
        };

        let report = self.evaluate(&vectorizer, &model, &train_rows, &test_rows);
        for line in report.to_string().lines() {
            info!("{line}");
        }

        let artifact = ClassifierArtifact {
            vectorizer,
            model,
            metadata: ArtifactMetadata {
                trained_at: Utc::now(),
                training_examples: report.training_examples,
                test_examples: report.test_examples,
                validation_metrics: report.metric_map(),
            },
        };
        artifact.save(&self.config.model_dir)?;
        info!("saved artifact to {}", self.config.model_dir.display());

        Ok(report)
    }

    /// Seeded shuffle followed by a tail split. At least one row always
    /// stays in the training partition.
    fn split(&self, mut rows: Vec<TrainingRecord>) -> (Vec<TrainingRecord>, Vec<TrainingRecord>) {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        rows.shuffle(&mut rng);

        let test_len = ((rows.len() as f64) * self.config.test_ratio).round() as usize;
        let test_len = test_len.min(rows.len().saturating_sub(1));
        let split_at = rows.len() - test_len;
        let test_rows = rows.split_off(split_at);
        (rows, test_rows)
    }

    fn evaluate(
        &self,
        vectorizer: &TfIdfVectorizer,
        model: &ClassifierModel,
        train_rows: &[TrainingRecord],
        test_rows: &[TrainingRecord],
    ) -> TrainingReport {
        let per_label = if test_rows.is_empty() {
            Vec::new()
        } else {
            let test_vectors: Vec<_> = test_rows
                .iter()
                .map(|r| vectorizer.transform(&r.comment))
                .collect();
            match model {
                ClassifierModel::MultiLabel(model) => {
                    let truth: Vec<_> = test_rows.iter().map(|r| r.labels).collect();
                    let predictions: Vec<_> =
                        test_vectors.iter().map(|v| model.predict(v)).collect();
                    evaluate_multi_label(&truth, &predictions)
                }
                ClassifierModel::SingleLabel(model) => {
                    let truth: Vec<bool> =
                        test_rows.iter().map(|r| r.labels.any_abusive()).collect();
                    let predictions: Vec<bool> = test_vectors
                        .iter()
                        .map(|v| model.predict(v) == ModerationLabel::Toxic)
                        .collect();
                    evaluate_single_label(&truth, &predictions)
                }
            }
        };

        TrainingReport {
            training_examples: train_rows.len(),
            test_examples: test_rows.len(),
            per_label,
        }
    }
}
