//! Convert command implementation

use anyhow::{Context, Result};
use cases_core::{CaseMode, Converter, TitleCaser};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::clipboard::{copy_quietly, SystemClipboard};
use crate::config::LoadedConfig;
use crate::input::InputSource;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Text to convert (stdin is read when neither --text nor --input is given)
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", num_args = 1..)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Conversion to apply (default: title, or the configured default)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Copy the result to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CASES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Converted text, one input per line
    Text,
    /// JSON array of conversions with their source
    Json,
}

/// Supported conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// AP-stylebook title case
    Title,
    /// UPPERCASE
    Upper,
    /// lowercase
    Lower,
}

impl From<Mode> for CaseMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Title => CaseMode::Title,
            Mode::Upper => CaseMode::Upper,
            Mode::Lower => CaseMode::Lower,
        }
    }
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting conversion");
        log::debug!("Arguments: {:?}", self);

        let config = LoadedConfig::load(self.config.as_deref())?;
        let mode = self
            .mode
            .map(CaseMode::from)
            .unwrap_or(config.cli.processing.default_mode);
        let copy = self.copy || config.cli.output.copy_to_clipboard;
        log::info!("Mode: {mode}, copy to clipboard: {copy}");

        let converter =
            Converter::new(TitleCaser::from_config(&config.words)).copy_to_clipboard(copy);

        let inputs = self.input_source().read()?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_inputs(inputs.len() as u64);

        let mut formatter = self.formatter(config.cli.output.pretty_json)?;
        let mut to_copy = Vec::new();

        for input in &inputs {
            let result = converter.convert(mode, &input.text);
            formatter.format_result(&input.source, &result)?;
            if result.copy_to_clipboard {
                to_copy.push(result.text);
            }
            progress.input_completed(&input.source);
        }

        formatter.finish()?;
        progress.finish();

        if !to_copy.is_empty() {
            copy_quietly(&mut SystemClipboard::new(), &to_copy.join("\n"));
        }

        Ok(())
    }

    /// Decide where the text comes from
    pub fn input_source(&self) -> InputSource {
        if let Some(text) = &self.text {
            InputSource::Inline(text.clone())
        } else if !self.input.is_empty() {
            InputSource::Files(self.input.clone())
        } else {
            InputSource::Stdin
        }
    }

    fn formatter(&self, pretty_json: bool) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running under tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
