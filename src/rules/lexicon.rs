//! Word lists backing the heuristic rules.

/// Default abuse words: English plus basic regional transliterations.
///
/// Matching is substring containment over normalized text, so these are
/// deliberately short, high-precision roots.
pub const DEFAULT_ABUSE_WORDS: &[&str] = &[
    "fuck",
    "shit",
    "bitch",
    "ass",
    "idiot",
    "stupid",
    "bewakoof",
    "chu",
    "madarchod",
];

/// Default negative sentiment phrases.
pub const DEFAULT_NEGATIVE_WORDS: &[&str] = &[
    "worst",
    "useless",
    "bad",
    "boring",
    "confusing",
    "not good",
    "waste",
    "poor",
    "disappointed",
];

/// Extensible word lists used by [`RuleEngine`](super::RuleEngine).
///
/// Both lists are matched as substrings of normalized text, which also
/// catches simple inflections ("idiots", "boringly"). Phrases with internal
/// spaces are supported because normalization collapses whitespace runs.
#[derive(Debug, Clone)]
pub struct Lexicon {
    abuse_words: Vec<String>,
    negative_words: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            abuse_words: DEFAULT_ABUSE_WORDS.iter().map(|w| w.to_string()).collect(),
            negative_words: DEFAULT_NEGATIVE_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}

impl Lexicon {
    /// Create a lexicon with the default word lists.
    pub fn new() -> Self {
        Lexicon::default()
    }

    /// Create a lexicon with custom word lists.
    pub fn with_words<I, J, S>(abuse_words: I, negative_words: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Lexicon {
            abuse_words: abuse_words.into_iter().map(Into::into).collect(),
            negative_words: negative_words.into_iter().map(Into::into).collect(),
        }
    }

    /// Add an abuse word to the lexicon.
    pub fn add_abuse_word<S: Into<String>>(&mut self, word: S) {
        self.abuse_words.push(word.into());
    }

    /// Add a negative phrase to the lexicon.
    pub fn add_negative_word<S: Into<String>>(&mut self, word: S) {
        self.negative_words.push(word.into());
    }

    /// The abuse word list.
    pub fn abuse_words(&self) -> &[String] {
        &self.abuse_words
    }

    /// The negative phrase list.
    pub fn negative_words(&self) -> &[String] {
        &self.negative_words
    }
}
