//! AP-stylebook title casing
//!
//! This crate converts text to title case following AP stylebook
//! conventions, plus the trivial uppercase and lowercase conversions.
//!
//! # Architecture
//!
//! Title casing runs as a short pipeline of pure stages:
//! - **Quotes**: straight quotes become typographic quotes
//! - **Classification**: one part-of-speech pass finds short prepositions
//!   and conjunctions that may stay lowercase
//! - **Tokens**: whitespace-separated words, punctuation attached
//! - **Rules**: an ordered decision table picks each word's casing
//! - **Join**: words are reassembled with single spaces
//!
//! The part-of-speech backend sits behind [`LexicalClassifier`], so a
//! different tagger (or a stub in tests) can be plugged in.
//!
//! # Example
//!
//! ```rust
//! use cases_core::{title_case, TitleCaser};
//!
//! assert_eq!(title_case("a tale of the city"), "A Tale of the City");
//!
//! let caser = TitleCaser::new();
//! assert_eq!(caser.title_case("use macOS now"), "Use macOS Now");
//! ```

pub mod caser;
pub mod classifier;
pub mod config;
pub mod convert;
pub mod error;
pub mod quotes;
pub mod rules;
pub mod token;

use std::sync::OnceLock;

pub use caser::{TitleCaser, TitleCaserBuilder};
pub use classifier::{
    LexicalClass, LexicalClassifier, LexiconClassifier, LowercasableSet, NullClassifier,
    TaggedSpan,
};
pub use config::{CasesConfig, WordSets};
pub use convert::{lower_case, upper_case, CaseMode, ConversionResult, Converter};
pub use error::{CasesError, ClassifierError, Result};
pub use quotes::smart_quotes;
pub use rules::Rule;

static DEFAULT_CASER: OnceLock<TitleCaser> = OnceLock::new();

/// Title-case `input` with the English word sets and dictionary classifier
pub fn title_case(input: &str) -> String {
    DEFAULT_CASER.get_or_init(TitleCaser::new).title_case(input)
}
