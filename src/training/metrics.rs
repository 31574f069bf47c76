//! Held-out evaluation metrics.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Label, LabelSet};

/// Precision/recall/F1 for one label on the held-out partition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelMetrics {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of actual positives in the held-out partition.
    pub support: usize,
}

impl LabelMetrics {
    fn from_counts(label: &str, true_pos: usize, false_pos: usize, false_neg: usize) -> Self {
        let precision = ratio(true_pos, true_pos + false_pos);
        let recall = ratio(true_pos, true_pos + false_neg);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        LabelMetrics {
            label: label.to_string(),
            precision,
            recall,
            f1,
            support: true_pos + false_neg,
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// The evaluation report produced at the end of training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub training_examples: usize,
    pub test_examples: usize,
    pub per_label: Vec<LabelMetrics>,
}

impl TrainingReport {
    /// Flatten the metrics into a "label/metric" map for artifact metadata.
    pub fn metric_map(&self) -> HashMap<String, f64> {
        let mut map = HashMap::new();
        for metrics in &self.per_label {
            map.insert(format!("{}/precision", metrics.label), metrics.precision);
            map.insert(format!("{}/recall", metrics.label), metrics.recall);
            map.insert(format!("{}/f1", metrics.label), metrics.f1);
        }
        map
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} training examples, {} held out",
            self.training_examples, self.test_examples
        )?;
        if self.per_label.is_empty() {
            return writeln!(f, "held-out partition empty, evaluation skipped");
        }
        writeln!(
            f,
            "{:<12} {:>9} {:>9} {:>9} {:>9}",
            "label", "precision", "recall", "f1", "support"
        )?;
        for m in &self.per_label {
            writeln!(
                f,
                "{:<12} {:>9.3} {:>9.3} {:>9.3} {:>9}",
                m.label, m.precision, m.recall, m.f1, m.support
            )?;
        }
        Ok(())
    }
}

/// Evaluate multi-label predictions against the true flag sets.
pub fn evaluate_multi_label(truth: &[LabelSet], predictions: &[Vec<Label>]) -> Vec<LabelMetrics> {
    Label::ALL
        .iter()
        .map(|&label| {
            let mut true_pos = 0;
            let mut false_pos = 0;
            let mut false_neg = 0;
            for (actual, predicted) in truth.iter().zip(predictions) {
                let actual_positive = actual.is_set(label);
                let predicted_positive = predicted.contains(&label);
                match (actual_positive, predicted_positive) {
                    (true, true) => true_pos += 1,
                    (false, true) => false_pos += 1,
                    (true, false) => false_neg += 1,
                    (false, false) => {}
                }
            }
            LabelMetrics::from_counts(label.column(), true_pos, false_pos, false_neg)
        })
        .collect()
}

/// Evaluate single-label predictions over the collapsed Toxic/Safe classes.
pub fn evaluate_single_label(truth: &[bool], predictions: &[bool]) -> Vec<LabelMetrics> {
    ["toxic", "safe"]
        .iter()
        .enumerate()
        .map(|(class, name)| {
            let positive = class == 0;
            let mut true_pos = 0;
            let mut false_pos = 0;
            let mut false_neg = 0;
            for (&actual, &predicted) in truth.iter().zip(predictions) {
                match (actual == positive, predicted == positive) {
                    (true, true) => true_pos += 1,
                    (false, true) => false_pos += 1,
                    (true, false) => false_neg += 1,
                    (false, false) => {}
                }
            }
            LabelMetrics::from_counts(name, true_pos, false_pos, false_neg)
        })
        .collect()
}
