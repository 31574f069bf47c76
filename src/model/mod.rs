//! Statistical classifier over extracted feature vectors.
//!
//! The model layer is deliberately small: a deterministic binary logistic
//! regression, composed either as six independent one-vs-rest estimators
//! (multi-label mode) or as a closed-set single-label classifier. Given the
//! same fitted state and input vector, prediction is always identical.

pub mod classifier;
pub mod labels;
pub mod logistic;

pub use classifier::{ClassifierModel, MultiLabelClassifier, SingleLabelClassifier};
pub use labels::{Label, LabelSet, ModerationLabel};
pub use logistic::{BinaryLogisticRegression, LogisticConfig};
