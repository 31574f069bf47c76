//! The training pipeline: dataset loading, fitting, evaluation, and
//! artifact persistence.

pub mod dataset;
pub mod metrics;
pub mod trainer;

pub use dataset::{TrainingRecord, load_dataset};
pub use metrics::{LabelMetrics, TrainingReport};
pub use trainer::{Trainer, TrainerConfig, TrainingMode};
