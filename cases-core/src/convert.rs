//! Conversion modes and the result handed back to callers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::caser::TitleCaser;

/// Available conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// AP-stylebook title case
    #[default]
    Title,
    /// Every character uppercased
    Upper,
    /// Every character lowercased
    Lower,
}

impl CaseMode {
    pub const ALL: [CaseMode; 3] = [CaseMode::Title, CaseMode::Upper, CaseMode::Lower];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMode::Title => "title",
            CaseMode::Upper => "upper",
            CaseMode::Lower => "lower",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CaseMode::Title => "AP-stylebook title case",
            CaseMode::Upper => "UPPERCASE EVERYTHING",
            CaseMode::Lower => "lowercase everything",
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(CaseMode::Title),
            "upper" | "uppercase" => Ok(CaseMode::Upper),
            "lower" | "lowercase" => Ok(CaseMode::Lower),
            other => Err(format!("Unknown case mode: {other}")),
        }
    }
}

/// Uppercase every character; no tokenization, whitespace kept
pub fn upper_case(input: &str) -> String {
    input.to_uppercase()
}

/// Lowercase every character; no tokenization, whitespace kept
pub fn lower_case(input: &str) -> String {
    input.to_lowercase()
}

/// Converted text plus the caller's clipboard decision
///
/// The library never touches the clipboard; `copy_to_clipboard` only
/// tells the caller what its setting was when the conversion ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub mode: CaseMode,
    pub text: String,
    pub copy_to_clipboard: bool,
}

/// One entry point for all three conversions
#[derive(Debug, Clone, Default)]
pub struct Converter {
    caser: TitleCaser,
    copy_to_clipboard: bool,
}

impl Converter {
    pub fn new(caser: TitleCaser) -> Self {
        Self {
            caser,
            copy_to_clipboard: false,
        }
    }

    /// Mark results for copying to the clipboard
    pub fn copy_to_clipboard(mut self, enabled: bool) -> Self {
        self.copy_to_clipboard = enabled;
        self
    }

    pub fn convert(&self, mode: CaseMode, input: &str) -> ConversionResult {
        let text = match mode {
            CaseMode::Title => self.caser.title_case(input),
            CaseMode::Upper => upper_case(input),
            CaseMode::Lower => lower_case(input),
        };
        ConversionResult {
            mode,
            text,
            copy_to_clipboard: self.copy_to_clipboard,
        }
    }
}
