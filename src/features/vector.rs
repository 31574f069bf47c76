//! Sparse feature vectors.

use serde::{Deserialize, Serialize};

/// A sparse numeric vector over a fixed-width feature space.
///
/// Entries are (index, value) pairs sorted by index; indices absent from the
/// entry list are zero. The width is fixed by the vectorizer at fit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    dims: usize,
    entries: Vec<(u32, f64)>,
}

impl SparseVector {
    /// Create a sparse vector from unsorted entries.
    pub fn from_entries(dims: usize, mut entries: Vec<(u32, f64)>) -> Self {
        entries.sort_unstable_by_key(|&(idx, _)| idx);
        SparseVector { dims, entries }
    }

    /// An all-zero vector of the given width.
    pub fn zeros(dims: usize) -> Self {
        SparseVector {
            dims,
            entries: Vec::new(),
        }
    }

    /// The fixed width of the feature space.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// The non-zero entries, sorted by index.
    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    /// True if every component is zero.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product against a dense weight row of the same width.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        debug_assert_eq!(dense.len(), self.dims);
        self.entries
            .iter()
            .map(|&(idx, value)| value * dense[idx as usize])
            .sum()
    }

    /// The Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, value)| value * value)
            .sum::<f64>()
            .sqrt()
    }

    /// Scale the vector to unit Euclidean norm. No-op on zero vectors.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, value) in &mut self.entries {
                *value /= norm;
            }
        }
    }
}
