//! Persisted classifier artifacts.
//!
//! Training produces exactly two blobs in a model directory: the fitted
//! feature extractor and the trained classifier (with its metadata). After
//! loading, the artifact is read-only shared state; nothing in the pipeline
//! mutates it.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CivilityError, Result};
use crate::features::TfIdfVectorizer;
use crate::model::ClassifierModel;

/// File name of the serialized classifier model.
pub const MODEL_FILE: &str = "model.json";

/// File name of the serialized feature extractor.
pub const VECTORIZER_FILE: &str = "vectorizer.json";

/// Metadata recorded next to the trained model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Training timestamp.
    pub trained_at: DateTime<Utc>,
    /// Number of training examples after row filtering.
    pub training_examples: usize,
    /// Number of held-out evaluation examples.
    pub test_examples: usize,
    /// Per-label validation metrics, keyed as "label/metric".
    pub validation_metrics: HashMap<String, f64>,
}

#[derive(Serialize, Deserialize)]
struct ModelData {
    model: ClassifierModel,
    metadata: ArtifactMetadata,
}

/// The pair of fitted states produced by training.
///
/// Created exclusively by the training pipeline and loaded exactly once by
/// callers that classify; treated as opaque immutable state after load.
#[derive(Debug, Clone)]
pub struct ClassifierArtifact {
    pub vectorizer: TfIdfVectorizer,
    pub model: ClassifierModel,
    pub metadata: ArtifactMetadata,
}

impl ClassifierArtifact {
    /// Persist both halves of the artifact into `dir`.
    ///
    /// Each file is written to a temporary sibling and renamed into place,
    /// so a partially written artifact is never visible under its final
    /// name.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;

        let vectorizer_json = serde_json::to_string_pretty(&self.vectorizer)?;
        write_atomically(&dir.join(VECTORIZER_FILE), &vectorizer_json)?;

        let model_data = ModelData {
            model: self.model.clone(),
            metadata: self.metadata.clone(),
        };
        let model_json = serde_json::to_string_pretty(&model_data)?;
        write_atomically(&dir.join(MODEL_FILE), &model_json)?;

        Ok(())
    }

    /// Load both halves of the artifact from `dir`.
    ///
    /// Any missing, unreadable, or corrupt file maps to
    /// [`CivilityError::ArtifactNotFound`]: callers cannot classify without
    /// a complete artifact and must surface this as a setup failure.
    pub fn load(dir: &Path) -> Result<Self> {
        let vectorizer: TfIdfVectorizer = read_artifact_file(&dir.join(VECTORIZER_FILE))?;
        let model_data: ModelData = read_artifact_file(&dir.join(MODEL_FILE))?;

        Ok(ClassifierArtifact {
            vectorizer,
            model: model_data.model,
            metadata: model_data.metadata,
        })
    }
}

fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = PathBuf::from(format!("{}.tmp", path.display()));
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn read_artifact_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CivilityError::artifact_not_found(format!("{}: {}", path.display(), e))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        CivilityError::artifact_not_found(format!("{}: corrupt artifact: {}", path.display(), e))
    })
}
