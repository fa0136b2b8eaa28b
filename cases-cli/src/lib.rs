//! Cases CLI library
//!
//! This library provides the command-line shell around `cases-core`:
//! reading input text, choosing a conversion, writing the result and
//! optionally copying it to the clipboard.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
