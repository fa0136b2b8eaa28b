//! Capitalization decision table
//!
//! Each token is checked against an ordered list of rules and the first
//! match decides its casing. Sentence-restart capitalization is applied
//! afterwards by the caller, since it depends on the previous finalized
//! word rather than on the token itself.

use crate::classifier::LowercasableSet;
use crate::config::WordSets;
use crate::token::{Position, Token};

/// Which rule decided a token's casing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Uppercase letter after the first character; left as is
    InnerCapital,
    /// Internal period, e.g. a domain name; left as is
    InnerPeriod,
    /// Hyphenated compound; each part capitalized
    Hyphenated,
    /// First or last word
    Edge,
    /// Opens a quotation
    Quotation,
    Article,
    AlwaysCapitalize,
    AlwaysLowercase,
    /// Short preposition or conjunction
    ShortLowercasable,
    Default,
}

/// Casing a rule resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    Unchanged,
    Capitalize,
    CapitalizeParts,
    Lowercase,
}

impl Casing {
    pub fn apply(self, word: &str) -> String {
        match self {
            Casing::Unchanged => word.to_string(),
            Casing::Capitalize => capitalize(word),
            Casing::CapitalizeParts => capitalize_parts(word),
            Casing::Lowercase => word.to_lowercase(),
        }
    }
}

impl Rule {
    pub fn casing(self) -> Casing {
        match self {
            Rule::InnerCapital | Rule::InnerPeriod => Casing::Unchanged,
            Rule::Hyphenated => Casing::CapitalizeParts,
            Rule::Article | Rule::AlwaysLowercase | Rule::ShortLowercasable => Casing::Lowercase,
            Rule::Edge | Rule::Quotation | Rule::AlwaysCapitalize | Rule::Default => {
                Casing::Capitalize
            }
        }
    }
}

/// Per-token inputs to the decision table
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub position: Position,
    pub words: &'a WordSets,
    pub lowercasable: &'a LowercasableSet,
}

/// Words of this many characters or more are never lowercased as
/// prepositions or conjunctions
pub const MIN_CAPITALIZED_LEN: usize = 4;

/// Pick the first rule that matches `token`
pub fn select_rule(token: &Token<'_>, ctx: &RuleContext<'_>) -> Rule {
    if token.has_inner_uppercase() {
        return Rule::InnerCapital;
    }
    if token.has_inner_period() {
        return Rule::InnerPeriod;
    }
    if token.has_hyphen() {
        return Rule::Hyphenated;
    }
    if ctx.position.is_edge() {
        return Rule::Edge;
    }
    if token.starts_with_quote() {
        return Rule::Quotation;
    }

    let lowered = token.lowercase();
    if ctx.words.is_article(&lowered) {
        Rule::Article
    } else if ctx.words.is_always_capitalized(token.as_str()) {
        Rule::AlwaysCapitalize
    } else if ctx.words.is_always_lowercase(&lowered) {
        Rule::AlwaysLowercase
    } else if ctx.lowercasable.contains(&lowered) && token.char_len() < MIN_CAPITALIZED_LEN {
        Rule::ShortLowercasable
    } else {
        Rule::Default
    }
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            push_titlecase(&mut out, first);
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}

/// Titlecase form of the Latin digraphs; everything else is uppercased
fn push_titlecase(out: &mut String, ch: char) {
    match ch {
        '\u{01C4}'..='\u{01C6}' => out.push('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => out.push('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => out.push('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => out.push('\u{01F2}'),
        _ => out.extend(ch.to_uppercase()),
    }
}

/// Capitalize every hyphen-separated part (`well-known` → `Well-Known`)
pub fn capitalize_parts(word: &str) -> String {
    word.split('-').map(capitalize).collect::<Vec<_>>().join("-")
}

/// Capitalize each whitespace-separated word while keeping the whitespace
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            out.push(ch);
            at_word_start = true;
        } else if at_word_start {
            push_titlecase(&mut out, ch);
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
