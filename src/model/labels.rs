//! Label vocabulary for training flags and classification output.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six independent training flags, in canonical order.
///
/// The order is fixed: multi-label predictions are always reported as
/// insult, threat, hate, harassment, love, support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Insult,
    Threat,
    Hate,
    Harassment,
    Love,
    Support,
}

impl Label {
    /// All flags in canonical order.
    pub const ALL: [Label; 6] = [
        Label::Insult,
        Label::Threat,
        Label::Hate,
        Label::Harassment,
        Label::Love,
        Label::Support,
    ];

    /// The dataset column name for this flag.
    pub fn column(&self) -> &'static str {
        match self {
            Label::Insult => "insult",
            Label::Threat => "threat",
            Label::Hate => "hate",
            Label::Harassment => "harassment",
            Label::Love => "love",
            Label::Support => "support",
        }
    }

    /// The output token for this flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Insult => "Insult",
            Label::Threat => "Threat",
            Label::Hate => "Hate",
            Label::Harassment => "Harassment",
            Label::Love => "Love",
            Label::Support => "Support",
        }
    }

    /// True for flags that mark abusive content.
    pub fn is_abusive(&self) -> bool {
        matches!(
            self,
            Label::Insult | Label::Threat | Label::Hate | Label::Harassment
        )
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary flags attached to one training comment, canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelSet {
    flags: [u8; 6],
}

impl LabelSet {
    /// Build a label set from canonical-order flags.
    pub fn from_flags(flags: [u8; 6]) -> Self {
        LabelSet {
            flags: flags.map(|f| if f != 0 { 1 } else { 0 }),
        }
    }

    /// The flag value for one label.
    pub fn get(&self, label: Label) -> u8 {
        let index = Label::ALL.iter().position(|&l| l == label).unwrap();
        self.flags[index]
    }

    /// True if the flag for `label` is set.
    pub fn is_set(&self, label: Label) -> bool {
        self.get(label) == 1
    }

    /// Labels whose flag is set, in canonical order.
    pub fn positives(&self) -> Vec<Label> {
        Label::ALL
            .into_iter()
            .filter(|&label| self.is_set(label))
            .collect()
    }

    /// True if any abusive flag (insult, threat, hate, harassment) is set.
    pub fn any_abusive(&self) -> bool {
        Label::ALL
            .into_iter()
            .any(|label| label.is_abusive() && self.is_set(label))
    }
}

/// A single output token of the classification pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModerationLabel {
    /// No analyzable semantic content.
    Invalid,
    /// High-confidence abusive content (heuristic or collapsed model).
    Toxic,
    /// Negative sentiment without abuse.
    Negative,
    /// Nothing fired.
    Safe,
    /// A positive multi-label flag.
    Flag(Label),
}

impl ModerationLabel {
    /// The output token text.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationLabel::Invalid => "Invalid",
            ModerationLabel::Toxic => "Toxic",
            ModerationLabel::Negative => "Negative",
            ModerationLabel::Safe => "Safe",
            ModerationLabel::Flag(label) => label.as_str(),
        }
    }
}

impl From<Label> for ModerationLabel {
    fn from(label: Label) -> Self {
        ModerationLabel::Flag(label)
    }
}

impl fmt::Display for ModerationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
