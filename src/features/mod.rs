//! Feature extraction: frequency-weighted n-gram vectors.

pub mod vector;
pub mod vectorizer;

pub use vector::SparseVector;
pub use vectorizer::{TfIdfVectorizer, VectorizerConfig};
