//! Word table configuration
//!
//! This module defines the TOML schema for the fixed word sets and the
//! dictionary behind the built-in classifier. The English tables are
//! embedded in the binary; a user file only needs to list the tables it
//! wants to replace.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{CasesError, Result};

/// The embedded English tables, as TOML
pub const ENGLISH_TOML: &str = include_str!("../configs/english.toml");

static ENGLISH: OnceLock<CasesConfig> = OnceLock::new();

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CasesConfig {
    pub metadata: Metadata,
    pub words: WordsConfig,
    pub lexicon: LexiconConfig,
}

/// Configuration metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Fixed word sets consulted by the rule engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsConfig {
    pub articles: Vec<String>,
    #[serde(default)]
    pub always_capitalize: Vec<String>,
    #[serde(default)]
    pub always_lowercase: Vec<String>,
    pub end_marks: Vec<char>,
}

/// Dictionary for the built-in part-of-speech classifier
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub prepositions: Vec<String>,
    #[serde(default)]
    pub conjunctions: Vec<String>,
}

impl CasesConfig {
    /// The embedded English tables
    pub fn english() -> &'static CasesConfig {
        ENGLISH.get_or_init(|| {
            parse_table(ENGLISH_TOML)
                .and_then(deserialize)
                .expect("Failed to load embedded English config")
        })
    }

    /// Parse a user configuration, layering it over the English tables
    ///
    /// Tables missing from `toml_str` keep their English values, and keys
    /// this schema does not know about (e.g. CLI sections) are ignored.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let mut base = parse_table(ENGLISH_TOML)?;
        let overlay = parse_table(toml_str)?;
        merge_tables(&mut base, overlay);

        let config = deserialize(base)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a user configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(CasesError::Config("metadata.code must not be empty".to_string()));
        }

        let lists = [
            ("words.articles", &self.words.articles),
            ("words.always_capitalize", &self.words.always_capitalize),
            ("words.always_lowercase", &self.words.always_lowercase),
            ("lexicon.prepositions", &self.lexicon.prepositions),
            ("lexicon.conjunctions", &self.lexicon.conjunctions),
        ];
        for (name, words) in lists {
            for word in words {
                if word.is_empty() {
                    return Err(CasesError::Config(format!("{name} contains an empty word")));
                }
                if word.chars().any(char::is_whitespace) {
                    return Err(CasesError::Config(format!(
                        "{name} entry '{word}' contains whitespace"
                    )));
                }
            }
        }

        if let Some(mark) = self
            .words
            .end_marks
            .iter()
            .find(|c| c.is_alphanumeric() || c.is_whitespace())
        {
            return Err(CasesError::Config(format!(
                "words.end_marks entry '{mark}' is not punctuation"
            )));
        }

        Ok(())
    }

    /// Runtime word sets built from this configuration
    pub fn word_sets(&self) -> WordSets {
        WordSets::from_config(&self.words)
    }
}

/// Immutable word sets owned by a title caser
///
/// Articles and always-lowercase words are matched against a token's
/// lowercased form; always-capitalize entries are matched exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSets {
    articles: HashSet<String>,
    always_capitalize: HashSet<String>,
    always_lowercase: HashSet<String>,
    end_marks: HashSet<char>,
}

impl WordSets {
    /// Build from a words table
    pub fn from_config(words: &WordsConfig) -> Self {
        Self {
            articles: words.articles.iter().map(|w| w.to_lowercase()).collect(),
            always_capitalize: words.always_capitalize.iter().cloned().collect(),
            always_lowercase: words.always_lowercase.iter().map(|w| w.to_lowercase()).collect(),
            end_marks: words.end_marks.iter().copied().collect(),
        }
    }

    /// The embedded English word sets
    pub fn english() -> Self {
        CasesConfig::english().word_sets()
    }

    /// Word sets from a user configuration layered over English
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(CasesConfig::from_toml_str(toml_str)?.word_sets())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(CasesConfig::from_file(path)?.word_sets())
    }

    pub fn is_article(&self, lowered: &str) -> bool {
        self.articles.contains(lowered)
    }

    pub fn is_always_capitalized(&self, word: &str) -> bool {
        self.always_capitalize.contains(word)
    }

    pub fn is_always_lowercase(&self, lowered: &str) -> bool {
        self.always_lowercase.contains(lowered)
    }

    pub fn is_end_mark(&self, ch: char) -> bool {
        self.end_marks.contains(&ch)
    }
}

impl Default for WordSets {
    fn default() -> Self {
        Self::english()
    }
}

fn parse_table(toml_str: &str) -> Result<toml::Table> {
    toml::from_str(toml_str).map_err(|e| CasesError::Config(format!("Failed to parse config: {e}")))
}

fn deserialize(table: toml::Table) -> Result<CasesConfig> {
    toml::Value::Table(table)
        .try_into::<CasesConfig>()
        .map_err(|e| CasesError::Config(format!("Invalid config: {e}")))
}

/// Overlay `overlay` onto `base`, replacing leaves and merging nested tables
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                } else {
                    base.insert(key, toml::Value::Table(incoming));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}
