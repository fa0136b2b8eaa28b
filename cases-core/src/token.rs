//! Whitespace tokenization and reassembly

use crate::quotes::is_quote;

/// A run of non-whitespace text with punctuation still attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }

    /// Length in characters, not bytes
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn starts_with_quote(&self) -> bool {
        self.text.chars().next().is_some_and(is_quote)
    }

    /// Any uppercase letter after the first character (`macOS`, `iPhone`)
    pub fn has_inner_uppercase(&self) -> bool {
        self.text.chars().skip(1).any(char::is_uppercase)
    }

    /// A period followed by at least one more character (`example.com`,
    /// `U.S.`), as opposed to a sentence-ending period
    pub fn has_inner_period(&self) -> bool {
        let mut chars = self.text.chars();
        chars.next_back();
        chars.any(|c| c == '.')
    }

    pub fn has_hyphen(&self) -> bool {
        self.text.contains('-')
    }

    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }
}

/// Where a token sits in the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    First,
    Interior,
    Last,
    /// The only token; both first and last
    Only,
}

impl Position {
    pub fn of(index: usize, count: usize) -> Self {
        match (index == 0, index + 1 == count) {
            (true, true) => Position::Only,
            (true, false) => Position::First,
            (false, true) => Position::Last,
            (false, false) => Position::Interior,
        }
    }

    pub fn is_edge(self) -> bool {
        !matches!(self, Position::Interior)
    }
}

/// Split on whitespace runs, dropping empty tokens
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace().map(Token::new).collect()
}

/// Join finalized words with single spaces
pub fn join<S: AsRef<str>>(words: &[S]) -> String {
    let capacity = words.iter().map(|w| w.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(word.as_ref());
    }
    out
}
