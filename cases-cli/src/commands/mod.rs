//! CLI command implementations

use anyhow::Result;
use cases_core::CaseMode;
use clap::Subcommand;

pub mod convert;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert text to title, upper or lower case
    Convert(convert::ConvertArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Write a configuration template with the built-in word tables
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available conversions
    Modes,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by `cases list <subcommand>`
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Modes => CaseMode::ALL
                .iter()
                .map(|mode| format!("{:<6} {}", mode.as_str(), mode.description()))
                .collect(),
            ListCommands::Formats => vec![
                "text   Converted text, one input per line".to_string(),
                "json   JSON array of conversions with their source".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let convert_cmd = Commands::Convert(convert::ConvertArgs {
            text: Some("the quick brown fox".to_string()),
            input: vec![],
            output: None,
            format: convert::OutputFormat::Text,
            mode: Some(convert::Mode::Title),
            copy: false,
            config: None,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", convert_cmd);
        assert!(debug_str.contains("Convert"));
        assert!(debug_str.contains("the quick brown fox"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Modes,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Modes"));
    }

    #[test]
    fn test_list_modes() {
        let lines = ListCommands::Modes.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("title"));
        assert!(lines[1].starts_with("upper"));
        assert!(lines[2].starts_with("lower"));
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        assert!(lines.iter().any(|l| l.starts_with("text")));
        assert!(lines.iter().any(|l| l.starts_with("json")));
    }
}
