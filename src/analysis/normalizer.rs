//! Deterministic text normalization.
//!
//! The normalizer is a pure function over raw comment text: lowercase,
//! remove URL-like substrings, drop characters outside the allow-list, and
//! collapse whitespace. The same instance is used when building training
//! corpora and when classifying, so the two can never disagree.
//!
//! # Examples
//!
//! ```
//! use civility::analysis::TextNormalizer;
//!
//! let normalizer = TextNormalizer::default();
//! assert_eq!(
//!     normalizer.normalize("Check THIS out!! http://spam.example  "),
//!     "check this out"
//! );
//! ```

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref URL_PATTERN: Regex = Regex::new(r"(?:https?://|www\.)\S+|http\S+").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new(r"\s+").unwrap();
}

/// Token substituted for URLs under [`UrlPolicy::Placeholder`].
const URL_PLACEHOLDER: &str = "weblink";

/// How URL-like substrings are handled during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlPolicy {
    /// Remove URLs entirely. The canonical default.
    #[default]
    Strip,
    /// Replace each URL with a fixed placeholder token.
    Placeholder,
}

/// Configuration for [`TextNormalizer`].
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// URL handling policy.
    pub url_policy: UrlPolicy,
    /// Inclusive Unicode ranges kept in addition to ASCII letters and
    /// whitespace. The default covers the Devanagari through Malayalam
    /// blocks used by regional-script comments.
    pub script_ranges: Vec<(char, char)>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        NormalizerConfig {
            url_policy: UrlPolicy::Strip,
            script_ranges: vec![('\u{0900}', '\u{0D7F}')],
        }
    }
}

/// A pure, deterministic comment text normalizer.
///
/// Steps are applied in a fixed order: lowercase, URL handling, allow-list
/// character filtering (everything else becomes a space), whitespace
/// collapsing with end trimming. Normalization never fails; empty input
/// normalizes to an empty string, and the function is idempotent.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Create a normalizer with the default configuration.
    pub fn new() -> Self {
        TextNormalizer::default()
    }

    /// Create a normalizer with a custom configuration.
    pub fn with_config(config: NormalizerConfig) -> Self {
        TextNormalizer { config }
    }

    /// Normalize raw comment text.
    pub fn normalize(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();

        let without_urls = match self.config.url_policy {
            UrlPolicy::Strip => URL_PATTERN.replace_all(&lowered, " "),
            UrlPolicy::Placeholder => {
                URL_PATTERN.replace_all(&lowered, format!(" {URL_PLACEHOLDER} ").as_str())
            }
        };

        let mut filtered = String::with_capacity(without_urls.len());
        for ch in without_urls.chars() {
            if self.is_allowed(ch) {
                filtered.push(ch);
            } else {
                filtered.push(' ');
            }
        }

        WHITESPACE_PATTERN
            .replace_all(filtered.trim(), " ")
            .into_owned()
    }

    fn is_allowed(&self, ch: char) -> bool {
        if ch.is_ascii_alphabetic() || ch.is_whitespace() {
            return true;
        }
        self.config
            .script_ranges
            .iter()
            .any(|&(start, end)| ch >= start && ch <= end)
    }
}
