//! Text analysis for the moderation pipeline.
//!
//! Analysis is the shared front end of both training and inference: raw
//! comment text is normalized once, then tokenized into words. Keeping a
//! single normalizer code path prevents train/serve skew.

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{NormalizerConfig, TextNormalizer, UrlPolicy};
pub use tokenizer::WordTokenizer;
