//! System clipboard access
//!
//! Copying is fire-and-forget: a failed write is logged and reported on
//! stderr but never fails the command.

use std::time::{Duration, Instant};

use crate::error::CliError;

/// Destination for converted text
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<(), CliError>;
}

/// How long a copy is held on Linux, where the contents are served by
/// this process and vanish when it exits
pub const DEFAULT_HOLD: Duration = Duration::from_secs(2);

/// The platform clipboard via `arboard`
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    hold: Duration,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { hold: DEFAULT_HOLD }
    }

    /// Set how long to keep serving the contents before returning
    pub fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    /// Latest moment the process keeps ownership of the selection
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    fn deadline(&self, now: Instant) -> Instant {
        now + self.hold
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    #[cfg(target_os = "linux")]
    fn set_text(&mut self, text: &str) -> Result<(), CliError> {
        use arboard::SetExtLinux;

        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| CliError::ClipboardError(e.to_string()))?;
        // Returns once a clipboard manager or another application takes
        // ownership, or at the deadline
        clipboard
            .set()
            .wait_until(self.deadline(Instant::now()))
            .text(text.to_owned())
            .map_err(|e| CliError::ClipboardError(e.to_string()))
    }

    #[cfg(not(target_os = "linux"))]
    fn set_text(&mut self, text: &str) -> Result<(), CliError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| CliError::ClipboardError(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| CliError::ClipboardError(e.to_string()))
    }
}

/// Copy `text`, logging instead of failing; returns whether it was copied
pub fn copy_quietly(sink: &mut dyn ClipboardSink, text: &str) -> bool {
    match sink.set_text(text) {
        Ok(()) => {
            log::info!("Copied {} bytes to the clipboard", text.len());
            true
        }
        Err(e) => {
            log::warn!("{e}");
            eprintln!("Warning: could not copy to clipboard ({e})");
            false
        }
    }
}
