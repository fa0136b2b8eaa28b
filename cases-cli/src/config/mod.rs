//! Configuration module
//!
//! One TOML file configures both the CLI (`[output]`, `[processing]`) and
//! the word tables (`[words]`, `[lexicon]`) used by the title caser.

use std::path::Path;

use anyhow::{Context, Result};
use cases_core::{CaseMode, CasesConfig};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ProcessingConfig {
    /// Conversion used when `--mode` is not given
    #[serde(default)]
    pub default_mode: CaseMode,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Copy every result to the system clipboard
    #[serde(default)]
    pub copy_to_clipboard: bool,

    /// Pretty print JSON output
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            copy_to_clipboard: false,
            pretty_json: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Everything loaded from a configuration file
#[derive(Debug)]
pub struct LoadedConfig {
    pub cli: CliConfig,
    pub words: CasesConfig,
}

impl LoadedConfig {
    /// Built-in defaults, used when no file is given
    pub fn defaults() -> Self {
        Self {
            cli: CliConfig::default(),
            words: CasesConfig::english().clone(),
        }
    }

    /// Load `path`, or fall back to the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::defaults());
        };

        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let cli: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        let words = CasesConfig::from_toml_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(Self { cli, words })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = LoadedConfig::load(None).unwrap();
        assert_eq!(config.cli.processing.default_mode, CaseMode::Title);
        assert!(!config.cli.output.copy_to_clipboard);
        assert!(config.cli.output.pretty_json);
        assert_eq!(config.words.metadata.code, "en");
    }

    #[test]
    fn test_load_full_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[processing]
default_mode = "upper"

[output]
copy_to_clipboard = true
pretty_json = false

[words]
always_capitalize = ["NASA"]
"#
        )
        .unwrap();

        let config = LoadedConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.cli.processing.default_mode, CaseMode::Upper);
        assert!(config.cli.output.copy_to_clipboard);
        assert!(!config.cli.output.pretty_json);
        assert_eq!(config.words.words.always_capitalize, vec!["NASA".to_string()]);
    }

    #[test]
    fn test_partial_output_section_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\ncopy_to_clipboard = true\n").unwrap();

        let config = LoadedConfig::load(Some(file.path())).unwrap();
        assert!(config.cli.output.copy_to_clipboard);
        assert!(config.cli.output.pretty_json);
    }

    #[test]
    fn test_missing_file() {
        let err = LoadedConfig::load(Some(Path::new("/nonexistent/cases.toml"))).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[processing]\ndefault_mode = \"sentence\"\n").unwrap();

        let err = LoadedConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_invalid_word_table_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[words]\narticles = [\"\"]\n").unwrap();

        let err = LoadedConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("empty word"));
    }
}
