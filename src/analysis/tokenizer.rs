//! Word tokenization over normalized text.

use unicode_segmentation::UnicodeSegmentation;

/// A tokenizer that splits text on Unicode word boundaries (UAX #29).
///
/// Non-word segments such as punctuation and whitespace are filtered out.
/// On normalized text this reduces to whitespace splitting, but it stays
/// correct for scripts without explicit word separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Split text into word tokens.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_words() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            tokenizer.tokenize("this was boring and useless"),
            vec!["this", "was", "boring", "and", "useless"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        let tokenizer = WordTokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_regional_script() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(tokenizer.tokenize("यह अच्छा है"), vec!["यह", "अच्छा", "है"]);
    }
}
