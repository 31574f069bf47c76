//! TF-IDF vectorizer for comment feature extraction.

use std::collections::HashMap;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::analysis::WordTokenizer;
use crate::error::{CivilityError, Result};
use crate::features::vector::SparseVector;

/// Configuration for [`TfIdfVectorizer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Largest n-gram captured; 2 keeps contiguous word pairs like
    /// "not good" as features.
    pub ngram_max: usize,
    /// Vocabulary cap. When candidates exceed it, the terms with the
    /// highest document frequency are kept.
    pub max_features: usize,
    /// Minimum number of documents a term must appear in.
    pub min_df: usize,
    /// Dampen within-document frequency as 1 + ln(tf), so a single
    /// repeated word cannot dominate a vector.
    pub sublinear_tf: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig {
            ngram_max: 2,
            max_features: 5000,
            min_df: 1,
            sublinear_tf: true,
        }
    }
}

/// TF-IDF vectorizer fit once during training and reused verbatim at
/// inference.
///
/// The vocabulary is frozen after [`fit`](Self::fit): `transform` takes
/// `&self` and out-of-vocabulary terms contribute nothing. Vectors are
/// L2-normalized so document length does not dominate the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    config: VectorizerConfig,
    /// Term -> feature index. Serialized as half of the artifact.
    vocabulary: HashMap<String, u32>,
    /// Inverse document frequency per feature index.
    idf: Vec<f64>,
    /// Number of documents seen at fit time.
    n_documents: usize,
    #[serde(skip, default)]
    tokenizer: WordTokenizer,
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(VectorizerConfig::default())
    }

    /// Create an unfitted vectorizer with a custom configuration.
    pub fn with_config(config: VectorizerConfig) -> Self {
        TfIdfVectorizer {
            config,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            tokenizer: WordTokenizer::new(),
        }
    }

    /// Fit the vocabulary and IDF table on a normalized training corpus.
    ///
    /// Fails with a configuration error on an empty corpus. Term selection
    /// is deterministic: document frequency descending, term text as the
    /// tie-break.
    pub fn fit(&mut self, corpus: &[String]) -> Result<()> {
        if corpus.is_empty() {
            return Err(CivilityError::configuration(
                "cannot fit vectorizer on an empty corpus",
            ));
        }

        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();
        for doc in corpus {
            let unique_terms: AHashSet<String> = self.terms_of(doc).into_iter().collect();
            for term in unique_terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let mut candidates: Vec<(String, usize)> = document_frequency
            .into_iter()
            .filter(|&(_, df)| df >= self.config.min_df)
            .collect();
        candidates.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        candidates.truncate(self.config.max_features);

        // Index assignment is lexicographic over the retained terms, so the
        // fitted state is independent of hash iteration order.
        candidates.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        self.n_documents = corpus.len();
        self.vocabulary = HashMap::with_capacity(candidates.len());
        self.idf = Vec::with_capacity(candidates.len());
        for (index, (term, df)) in candidates.into_iter().enumerate() {
            self.vocabulary.insert(term, index as u32);
            let idf = ((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
            self.idf.push(idf);
        }

        Ok(())
    }

    /// Transform normalized text into a TF-IDF feature vector.
    ///
    /// Never mutates the vectorizer; unknown terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: AHashMap<u32, f64> = AHashMap::new();
        for term in self.terms_of(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(index, count)| {
                let tf = if self.config.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                (index, tf * self.idf[index as usize])
            })
            .collect();

        let mut vector = SparseVector::from_entries(self.vocabulary.len(), entries);
        vector.l2_normalize();
        vector
    }

    /// Number of features in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// True once `fit` has populated the vocabulary.
    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }

    /// Unigrams plus contiguous n-grams up to `ngram_max`, joined with a
    /// single space.
    fn terms_of(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(text);
        let mut terms = Vec::with_capacity(tokens.len() * self.config.ngram_max);
        for n in 1..=self.config.ngram_max.max(1) {
            if tokens.len() < n {
                break;
            }
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
