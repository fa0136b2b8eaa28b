//! Part-of-speech classification
//!
//! The rule engine only needs to know which words are prepositions or
//! conjunctions. Any tagging backend can supply that through
//! [`LexicalClassifier`]; the crate ships a dictionary-backed
//! [`LexiconClassifier`] and a [`NullClassifier`] that tags nothing.

use std::collections::HashSet;

use crate::config::{CasesConfig, LexiconConfig};
use crate::error::ClassifierError;

/// Lexical class of a word span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalClass {
    Preposition,
    Conjunction,
    Other,
}

impl LexicalClass {
    /// Prepositions and conjunctions may be lowercased when short
    pub fn is_lowercasable(self) -> bool {
        matches!(self, LexicalClass::Preposition | LexicalClass::Conjunction)
    }
}

/// A tagged word, trimmed of surrounding whitespace and punctuation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSpan<'a> {
    pub class: LexicalClass,
    pub text: &'a str,
}

/// Tagging backend contract
pub trait LexicalClassifier: Send + Sync {
    /// Tag every word in `text`, in order
    fn classify<'a>(&self, text: &'a str) -> Result<Vec<TaggedSpan<'a>>, ClassifierError>;
}

/// Lowercased prepositions and conjunctions found in one input
///
/// Built once per conversion and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LowercasableSet {
    words: HashSet<String>,
}

impl LowercasableSet {
    pub fn from_spans(spans: &[TaggedSpan<'_>]) -> Self {
        let words = spans
            .iter()
            .filter(|span| span.class.is_lowercasable())
            .map(|span| span.text.to_lowercase())
            .collect();
        Self { words }
    }

    /// Run `classifier` over `text`, degrading to an empty set on failure
    pub fn collect(classifier: &dyn LexicalClassifier, text: &str) -> Self {
        match classifier.classify(text) {
            Ok(spans) => Self::from_spans(&spans),
            Err(e) => {
                log::warn!("Part-of-speech tagging failed, no words will be lowercased: {e}");
                Self::default()
            }
        }
    }

    pub fn contains(&self, lowered: &str) -> bool {
        self.words.contains(lowered)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split into words the way a tagger sees them: whitespace separated,
/// with leading and trailing punctuation removed
pub fn word_spans(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
}

/// Dictionary lookup classifier
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    prepositions: HashSet<String>,
    conjunctions: HashSet<String>,
}

impl LexiconClassifier {
    pub fn new(lexicon: &LexiconConfig) -> Self {
        Self {
            prepositions: lexicon.prepositions.iter().map(|w| w.to_lowercase()).collect(),
            conjunctions: lexicon.conjunctions.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Classifier over the embedded English dictionary
    pub fn english() -> Self {
        Self::new(&CasesConfig::english().lexicon)
    }

    fn class_of(&self, word: &str) -> LexicalClass {
        let lowered = word.to_lowercase();
        if self.prepositions.contains(&lowered) {
            LexicalClass::Preposition
        } else if self.conjunctions.contains(&lowered) {
            LexicalClass::Conjunction
        } else {
            LexicalClass::Other
        }
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::english()
    }
}

impl LexicalClassifier for LexiconClassifier {
    fn classify<'a>(&self, text: &'a str) -> Result<Vec<TaggedSpan<'a>>, ClassifierError> {
        Ok(word_spans(text)
            .map(|word| TaggedSpan {
                class: self.class_of(word),
                text: word,
            })
            .collect())
    }
}

/// Tags every word as [`LexicalClass::Other`]
#[derive(Debug, Clone, Copy, Default)]
pub struct NullClassifier;

impl LexicalClassifier for NullClassifier {
    fn classify<'a>(&self, text: &'a str) -> Result<Vec<TaggedSpan<'a>>, ClassifierError> {
        Ok(word_spans(text)
            .map(|word| TaggedSpan {
                class: LexicalClass::Other,
                text: word,
            })
            .collect())
    }
}
