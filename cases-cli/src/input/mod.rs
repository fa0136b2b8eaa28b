//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::path::PathBuf;

/// A piece of text to convert and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    /// Display name: a file path, `<text>` or `<stdin>`
    pub source: String,
    pub text: String,
}

/// Where the convert command takes its text from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given on the command line
    Inline(String),
    /// Files matched by glob patterns
    Files(Vec<String>),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Resolve the source into texts, in a stable order
    pub fn read(&self) -> Result<Vec<InputText>> {
        match self {
            InputSource::Inline(text) => Ok(vec![InputText {
                source: "<text>".to_string(),
                text: text.clone(),
            }]),
            InputSource::Files(patterns) => {
                let files: Vec<PathBuf> = resolve_patterns(patterns)?;
                log::info!("Resolved {} input file(s)", files.len());
                files
                    .iter()
                    .map(|path| {
                        Ok(InputText {
                            source: path.display().to_string(),
                            text: FileReader::read_text(path)?,
                        })
                    })
                    .collect()
            }
            InputSource::Stdin => Ok(vec![InputText {
                source: "<stdin>".to_string(),
                text: FileReader::read_stdin()?,
            }]),
        }
    }
}
