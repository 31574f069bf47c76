//! Multi-label and single-label classifier compositions.

use serde::{Deserialize, Serialize};

use crate::features::SparseVector;
use crate::model::labels::{Label, LabelSet, ModerationLabel};
use crate::model::logistic::{BinaryLogisticRegression, LogisticConfig};

/// Six independent one-vs-rest estimators, one per flag in canonical order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiLabelClassifier {
    estimators: Vec<BinaryLogisticRegression>,
}

impl MultiLabelClassifier {
    /// Fit one binary estimator per label.
    pub fn fit(vectors: &[SparseVector], labels: &[LabelSet], config: &LogisticConfig) -> Self {
        let estimators = Label::ALL
            .iter()
            .map(|&label| {
                let targets: Vec<u8> = labels.iter().map(|set| set.get(label)).collect();
                BinaryLogisticRegression::fit(vectors, &targets, config)
            })
            .collect();
        MultiLabelClassifier { estimators }
    }

    /// The subset of flags predicted positive, in canonical order.
    ///
    /// A vector with no known terms carries no evidence and predicts no
    /// flags.
    pub fn predict(&self, vector: &SparseVector) -> Vec<Label> {
        if vector.is_empty() {
            return Vec::new();
        }
        Label::ALL
            .iter()
            .zip(&self.estimators)
            .filter(|(_, estimator)| estimator.predict(vector))
            .map(|(&label, _)| label)
            .collect()
    }
}

/// Closed-set single-label classifier: overall Toxic vs. Safe.
///
/// The six training flags are collapsed — any abusive flag makes the
/// example Toxic. Negative sentiment never comes from this model; in
/// single-label deployments it is the rule engine's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleLabelClassifier {
    estimator: BinaryLogisticRegression,
}

impl SingleLabelClassifier {
    /// Fit on collapsed targets.
    pub fn fit(vectors: &[SparseVector], labels: &[LabelSet], config: &LogisticConfig) -> Self {
        let targets: Vec<u8> = labels
            .iter()
            .map(|set| u8::from(set.any_abusive()))
            .collect();
        SingleLabelClassifier {
            estimator: BinaryLogisticRegression::fit(vectors, &targets, config),
        }
    }

    /// Predict the overall label for a feature vector.
    ///
    /// A vector with no known terms carries no evidence and predicts Safe.
    pub fn predict(&self, vector: &SparseVector) -> ModerationLabel {
        if vector.is_empty() {
            return ModerationLabel::Safe;
        }
        if self.estimator.predict(vector) {
            ModerationLabel::Toxic
        } else {
            ModerationLabel::Safe
        }
    }
}

/// The trained classifier in either deployment mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClassifierModel {
    MultiLabel(MultiLabelClassifier),
    SingleLabel(SingleLabelClassifier),
}

impl ClassifierModel {
    /// Human-readable mode name, used in artifact metadata.
    pub fn mode(&self) -> &'static str {
        match self {
            ClassifierModel::MultiLabel(_) => "multi-label",
            ClassifierModel::SingleLabel(_) => "single-label",
        }
    }
}
