//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use cases_core::ConversionResult;
use std::io::Write;

/// Plain text formatter - outputs one converted text per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, _source: &str, result: &ConversionResult) -> Result<()> {
        // Upper/lowercase keep the input's trailing newline; print one
        writeln!(self.writer, "{}", result.text.trim_end_matches(['\r', '\n']))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
