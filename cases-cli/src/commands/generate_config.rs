//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the word tables and output settings");
        println!("2. Validate your configuration:");
        println!("   cases validate --config {}", self.output.display());
        println!("3. Use it for converting:");
        println!(
            "   cases convert --text \"your title\" --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    ///
    /// The word tables are the built-in English ones, so the template is
    /// valid as written.
    pub fn generate_template() -> String {
        format!(
            r#"# Cases configuration

[processing]
# Conversion used when --mode is not given: "title", "upper" or "lower"
default_mode = "title"

[output]
# Copy every converted text to the system clipboard
copy_to_clipboard = false

# Pretty print JSON output
pretty_json = true

{}"#,
            cases_core::config::ENGLISH_TOML
        )
    }
}
