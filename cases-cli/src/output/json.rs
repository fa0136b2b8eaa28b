//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use cases_core::{CaseMode, ConversionResult};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs conversions as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    conversions: Vec<ConversionData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversionData {
    /// Where the text came from
    pub source: String,
    /// Conversion applied
    pub mode: CaseMode,
    /// The converted text
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            conversions: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, source: &str, result: &ConversionResult) -> Result<()> {
        self.conversions.push(ConversionData {
            source: source.to_string(),
            mode: result.mode,
            text: result.text.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.conversions)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.conversions)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
