//! The three heuristic predicates.

use lazy_static::lazy_static;
use regex::Regex;

use super::lexicon::Lexicon;

lazy_static! {
    // Timestamps, counters, ratings: digits with separator punctuation only.
    static ref DIGITS_ONLY: Regex = Regex::new(r"^[\d\s:.\-]+$").unwrap();
    // No word characters at all (emoji runs, bare punctuation).
    static ref SYMBOLS_ONLY: Regex = Regex::new(r"^[^\w]+$").unwrap();
}

/// Heuristic rule engine over normalized comment text.
///
/// All predicates expect text that already went through
/// [`TextNormalizer`](crate::analysis::TextNormalizer); they are pure and
/// need no trained artifact. Each predicate answers one question, and the
/// orchestrator decides priority between them.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    lexicon: Lexicon,
}

impl RuleEngine {
    /// Create a rule engine with the default lexicon.
    pub fn new() -> Self {
        RuleEngine::default()
    }

    /// Create a rule engine with a custom lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        RuleEngine { lexicon }
    }

    /// The lexicon backing the abuse and negative checks.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// True if the text carries no analyzable semantic content: shorter
    /// than three characters once trimmed, digits/punctuation only, or
    /// symbols only.
    pub fn is_invalid(&self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.chars().count() < 3 {
            return true;
        }
        DIGITS_ONLY.is_match(text) || SYMBOLS_ONLY.is_match(text)
    }

    /// True if any abuse word occurs in the text.
    pub fn contains_abuse(&self, text: &str) -> bool {
        self.lexicon
            .abuse_words()
            .iter()
            .any(|word| text.contains(word.as_str()))
    }

    /// True if any negative phrase occurs in the text.
    pub fn is_negative(&self, text: &str) -> bool {
        self.lexicon
            .negative_words()
            .iter()
            .any(|word| text.contains(word.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_invalid_short() {
        let rules = RuleEngine::new();
        assert!(rules.is_invalid(""));
        assert!(rules.is_invalid("ok"));
        assert!(!rules.is_invalid("okay"));
    }

    #[test]
    fn test_is_invalid_digits_only() {
        let rules = RuleEngine::new();
        assert!(rules.is_invalid("12345"));
        assert!(rules.is_invalid("12:34"));
        assert!(rules.is_invalid("1.5 - 2.5"));
    }

    #[test]
    fn test_is_invalid_symbols_only() {
        let rules = RuleEngine::new();
        assert!(rules.is_invalid("!!!???"));
        assert!(rules.is_invalid("👍👍👍"));
    }

    #[test]
    fn test_is_invalid_accepts_words() {
        let rules = RuleEngine::new();
        assert!(!rules.is_invalid("great video 123"));
    }

    #[test]
    fn test_contains_abuse() {
        let rules = RuleEngine::new();
        assert!(rules.contains_abuse("what an idiot"));
        assert!(rules.contains_abuse("you idiots"));
        assert!(!rules.contains_abuse("thanks for the explanation"));
    }

    #[test]
    fn test_is_negative() {
        let rules = RuleEngine::new();
        assert!(rules.is_negative("this was boring and useless"));
        assert!(rules.is_negative("not good at all"));
        assert!(!rules.is_negative("clear and helpful"));
    }

    #[test]
    fn test_custom_lexicon() {
        let rules = RuleEngine::with_lexicon(Lexicon::with_words(vec!["harm"], vec!["meh"]));
        assert!(rules.contains_abuse("i will harm you"));
        assert!(rules.is_negative("it was meh"));
        assert!(!rules.contains_abuse("thanks a lot"));
    }
}
