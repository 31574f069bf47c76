//! # civility
//!
//! A moderation classifier for short user-generated comments, combining
//! deterministic heuristic rules with a trained statistical multi-label
//! classifier.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Deterministic text normalization shared by training and inference
//! - Rule-based short-circuits for invalid, abusive, and negative comments
//! - TF-IDF unigram/bigram features with a bounded vocabulary
//! - Multi-label or single-label logistic regression models
//! - Reproducible training with held-out evaluation and JSON artifacts
//!
//! ## Classifying comments
//!
//! ```no_run
//! use civility::pipeline::{ClassifierArtifact, CommentClassifier};
//! use std::path::Path;
//!
//! # fn main() -> civility::error::Result<()> {
//! let artifact = ClassifierArtifact::load(Path::new("model"))?;
//! let classifier = CommentClassifier::new(artifact);
//!
//! let result = classifier.classify("Thanks for the explanation");
//! assert_eq!(result.tokens(), ["Safe"]);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod features;
pub mod model;
pub mod pipeline;
pub mod rules;
pub mod training;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
