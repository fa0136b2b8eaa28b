//! Output formatting module

use anyhow::Result;
use cases_core::ConversionResult;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single conversion
    fn format_result(&mut self, source: &str, result: &ConversionResult) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
