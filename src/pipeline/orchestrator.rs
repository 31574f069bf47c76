//! The prediction orchestrator.
//!
//! Sequences the heuristic rules and the statistical model into one final
//! decision per comment. The order is fixed and short-circuiting: cheap,
//! high-precision signals preempt the model, and the model only resolves
//! the ambiguous remainder.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::TextNormalizer;
use crate::model::{ClassifierModel, ModerationLabel};
use crate::pipeline::artifact::ClassifierArtifact;
use crate::rules::RuleEngine;

/// The final label decision for one comment.
///
/// Always non-empty: either an ordered sequence of label tokens or the
/// single `Safe` sentinel, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    labels: Vec<ModerationLabel>,
}

impl Classification {
    fn single(label: ModerationLabel) -> Self {
        Classification {
            labels: vec![label],
        }
    }

    fn from_labels(labels: Vec<ModerationLabel>) -> Self {
        if labels.is_empty() {
            Classification::single(ModerationLabel::Safe)
        } else {
            Classification { labels }
        }
    }

    /// The ordered label tokens. Guaranteed non-empty.
    pub fn labels(&self) -> &[ModerationLabel] {
        &self.labels
    }

    /// The label tokens as strings, for display layers.
    pub fn tokens(&self) -> Vec<&'static str> {
        self.labels.iter().map(|label| label.as_str()).collect()
    }

    /// True if the decision is the `Safe` sentinel.
    pub fn is_safe(&self) -> bool {
        self.labels == [ModerationLabel::Safe]
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(", "))
    }
}

/// Classifies comments by sequencing heuristics and the trained model.
///
/// Construction takes the [`ClassifierArtifact`] explicitly, so tests can
/// inject small fitted artifacts and no process-wide state exists. The
/// classifier is `Send + Sync`; one instance can serve any number of
/// threads because classification never mutates it.
#[derive(Debug, Clone)]
pub struct CommentClassifier {
    normalizer: TextNormalizer,
    rules: RuleEngine,
    artifact: ClassifierArtifact,
}

impl CommentClassifier {
    /// Create a classifier with the default normalizer and rules.
    pub fn new(artifact: ClassifierArtifact) -> Self {
        CommentClassifier {
            normalizer: TextNormalizer::new(),
            rules: RuleEngine::new(),
            artifact,
        }
    }

    /// Replace the rule engine (custom lexicons).
    pub fn with_rules(mut self, rules: RuleEngine) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the normalizer.
    ///
    /// The normalizer must match the one used at training time, otherwise
    /// feature extraction silently degrades.
    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// The loaded artifact.
    pub fn artifact(&self) -> &ClassifierArtifact {
        &self.artifact
    }

    /// Classify one raw comment. Never fails, never returns an empty
    /// decision; the empty string classifies as `Invalid`.
    ///
    /// Decision order, first match wins:
    /// 1. `is_invalid` — noise, no model consultation;
    /// 2. `contains_abuse` — high-precision toxicity, no model;
    /// 3. `is_negative` — heuristics always win over the model, so this
    ///    runs before inference;
    /// 4. the trained model on the extracted features;
    /// 5. `Safe` when nothing fired.
    pub fn classify(&self, raw: &str) -> Classification {
        let text = self.normalizer.normalize(raw);

        if self.rules.is_invalid(&text) {
            return Classification::single(ModerationLabel::Invalid);
        }
        if self.rules.contains_abuse(&text) {
            return Classification::single(ModerationLabel::Toxic);
        }
        if self.rules.is_negative(&text) {
            return Classification::single(ModerationLabel::Negative);
        }

        let vector = self.artifact.vectorizer.transform(&text);
        match &self.artifact.model {
            ClassifierModel::MultiLabel(model) => {
                let flags = model.predict(&vector);
                Classification::from_labels(
                    flags.into_iter().map(ModerationLabel::from).collect(),
                )
            }
            ClassifierModel::SingleLabel(model) => Classification::single(model.predict(&vector)),
        }
    }

    /// Classify a batch of comments in parallel.
    ///
    /// Each comment is independent and the artifact is shared read-only,
    /// so this is a plain data-parallel map.
    pub fn classify_batch(&self, comments: &[String]) -> Vec<Classification> {
        comments
            .par_iter()
            .map(|comment| self.classify(comment))
            .collect()
    }
}
