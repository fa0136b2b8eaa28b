//! AP-style title caser
//!
//! Pipeline: smart quotes, all-caps folding, one classification pass over
//! the whole text, then per-token rule selection, sentence-restart
//! capitalization and joining.

use std::fmt;
use std::sync::Arc;

use crate::classifier::{LexicalClassifier, LexiconClassifier, LowercasableSet};
use crate::config::{CasesConfig, WordSets};
use crate::quotes::smart_quotes;
use crate::rules::{capitalize, capitalize_words, select_rule, RuleContext};
use crate::token::{join, tokenize, Position};

/// Converts text to title case
///
/// Immutable after construction and safe to share between threads.
#[derive(Clone)]
pub struct TitleCaser {
    words: WordSets,
    classifier: Arc<dyn LexicalClassifier>,
}

impl TitleCaser {
    /// English word sets with the built-in dictionary classifier
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TitleCaserBuilder {
        TitleCaserBuilder::default()
    }

    /// Build from a loaded configuration, using its lexicon for tagging
    pub fn from_config(config: &CasesConfig) -> Self {
        Self::builder()
            .words(config.word_sets())
            .classifier(LexiconClassifier::new(&config.lexicon))
            .build()
    }

    /// Convert `input` to title case
    ///
    /// Never fails: empty or whitespace-only input yields an empty string,
    /// and a classifier failure only disables preposition/conjunction
    /// lowercasing.
    pub fn title_case(&self, input: &str) -> String {
        let mut text = smart_quotes(input);
        if is_all_caps(&text) {
            text = capitalize_words(&text);
        }

        let lowercasable = LowercasableSet::collect(self.classifier.as_ref(), &text);
        let tokens = tokenize(&text);
        let count = tokens.len();
        let mut finalized: Vec<String> = Vec::with_capacity(count);

        for (index, token) in tokens.iter().enumerate() {
            let ctx = RuleContext {
                position: Position::of(index, count),
                words: &self.words,
                lowercasable: &lowercasable,
            };
            let rule = select_rule(token, &ctx);
            let mut word = rule.casing().apply(token.as_str());

            let after_end_mark = finalized
                .last()
                .and_then(|prev| prev.chars().next_back())
                .is_some_and(|c| self.words.is_end_mark(c));
            if after_end_mark {
                word = capitalize(&word);
            }

            log::debug!(
                "{:?} -> {:?} via {:?}{}",
                token.as_str(),
                word,
                rule,
                if after_end_mark { " (sentence start)" } else { "" }
            );
            finalized.push(word);
        }

        join(&finalized)
    }
}

impl Default for TitleCaser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TitleCaser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleCaser")
            .field("words", &self.words)
            .finish_non_exhaustive()
    }
}

/// Builder for [`TitleCaser`]
#[derive(Default)]
pub struct TitleCaserBuilder {
    words: Option<WordSets>,
    classifier: Option<Arc<dyn LexicalClassifier>>,
}

impl TitleCaserBuilder {
    /// Set the fixed word sets
    pub fn words(mut self, words: WordSets) -> Self {
        self.words = Some(words);
        self
    }

    /// Set the part-of-speech backend
    pub fn classifier<C: LexicalClassifier + 'static>(mut self, classifier: C) -> Self {
        self.classifier = Some(Arc::new(classifier));
        self
    }

    /// Share an existing backend
    pub fn shared_classifier(mut self, classifier: Arc<dyn LexicalClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn build(self) -> TitleCaser {
        TitleCaser {
            words: self.words.unwrap_or_else(WordSets::english),
            classifier: self
                .classifier
                .unwrap_or_else(|| Arc::new(LexiconClassifier::english())),
        }
    }
}

/// At least one cased letter and no lowercase ones
fn is_all_caps(text: &str) -> bool {
    let mut has_upper = false;
    for ch in text.chars() {
        if ch.is_lowercase() {
            return false;
        }
        has_upper |= ch.is_uppercase();
    }
    has_upper
}
