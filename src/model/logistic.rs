//! Binary logistic regression trained by batch gradient descent.

use serde::{Deserialize, Serialize};

use crate::features::SparseVector;

/// Hyperparameters for [`BinaryLogisticRegression`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LogisticConfig {
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Fixed number of full-batch iterations.
    pub iterations: usize,
    /// L2 regularization strength.
    pub l2: f64,
    /// Weight examples inversely to class frequency.
    pub balanced: bool,
}

impl Default for LogisticConfig {
    fn default() -> Self {
        LogisticConfig {
            learning_rate: 1.0,
            iterations: 300,
            l2: 1e-4,
            balanced: true,
        }
    }
}

/// A binary logistic regression over sparse feature vectors.
///
/// Training starts from zero weights and runs a fixed number of full-batch
/// gradient steps; there is no randomness anywhere, so refitting the same
/// data always yields the same model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryLogisticRegression {
    weights: Vec<f64>,
    bias: f64,
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl BinaryLogisticRegression {
    /// Fit a model on vectors with 0/1 targets.
    pub fn fit(vectors: &[SparseVector], targets: &[u8], config: &LogisticConfig) -> Self {
        debug_assert_eq!(vectors.len(), targets.len());

        let dims = vectors.first().map(|v| v.dims()).unwrap_or(0);
        let n = vectors.len() as f64;

        let n_positive = targets.iter().filter(|&&t| t == 1).count() as f64;
        let n_negative = n - n_positive;
        // "Balanced" class weights, n / (2 * class count). A class that
        // never occurs gets weight 1.0 so the gradient stays finite.
        let (weight_positive, weight_negative) = if config.balanced {
            (
                if n_positive > 0.0 { n / (2.0 * n_positive) } else { 1.0 },
                if n_negative > 0.0 { n / (2.0 * n_negative) } else { 1.0 },
            )
        } else {
            (1.0, 1.0)
        };

        let mut weights = vec![0.0; dims];
        let mut bias = 0.0;

        for _ in 0..config.iterations {
            let mut gradient = vec![0.0; dims];
            let mut gradient_bias = 0.0;

            for (vector, &target) in vectors.iter().zip(targets) {
                let prediction = sigmoid(bias + vector.dot(&weights));
                let sample_weight = if target == 1 {
                    weight_positive
                } else {
                    weight_negative
                };
                let residual = sample_weight * (prediction - f64::from(target));

                for &(index, value) in vector.entries() {
                    gradient[index as usize] += residual * value;
                }
                gradient_bias += residual;
            }

            let step = config.learning_rate / n.max(1.0);
            for (weight, grad) in weights.iter_mut().zip(&gradient) {
                *weight -= step * (grad + config.l2 * *weight);
            }
            bias -= step * gradient_bias;
        }

        BinaryLogisticRegression { weights, bias }
    }

    /// Positive-class probability for a feature vector.
    pub fn predict_score(&self, vector: &SparseVector) -> f64 {
        sigmoid(self.bias + vector.dot(&self.weights))
    }

    /// Positive-class decision at the 0.5 threshold.
    pub fn predict(&self, vector: &SparseVector) -> bool {
        self.predict_score(vector) >= 0.5
    }

    /// Number of features the model was fit on.
    pub fn dims(&self) -> usize {
        self.weights.len()
    }
}
