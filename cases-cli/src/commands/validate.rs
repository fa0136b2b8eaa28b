//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::LoadedConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match LoadedConfig::load(Some(&self.config)) {
            Ok(loaded) => {
                let words = &loaded.words;
                println!("✓ Configuration is valid!");
                println!("  Language: {} ({})", words.metadata.name, words.metadata.code);
                println!("  Default mode: {}", loaded.cli.processing.default_mode);
                println!("  Copy to clipboard: {}", loaded.cli.output.copy_to_clipboard);
                println!(
                    "  Articles: {}, always capitalized: {}, always lowercase: {}",
                    words.words.articles.len(),
                    words.words.always_capitalize.len(),
                    words.words.always_lowercase.len()
                );
                println!(
                    "  Prepositions: {}, conjunctions: {}",
                    words.lexicon.prepositions.len(),
                    words.lexicon.conjunctions.len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
