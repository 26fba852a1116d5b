//! CLI presenter for output formatting
//!
//! Standard output carries only the result lines (`ACCESS_DENIED`,
//! `DISMISSED:<id>`). Everything else goes to stderr.

use std::sync::Mutex;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Line printed when listener access is not granted
pub const ACCESS_DENIED: &str = "ACCESS_DENIED";

/// Result line for a dismissed notification
pub fn dismissed_line(id: u32) -> String {
    format!("DISMISSED:{}", id)
}

/// Presenter for CLI output formatting
pub struct Presenter {
    verbose: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            spinner: Mutex::new(None),
        }
    }

    /// Start a spinner with message
    pub fn start_spinner(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));

        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(spinner) {
                previous.finish_and_clear();
            }
        }
    }

    /// Stop spinner without status
    pub fn stop_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(spinner) = slot.take() {
                spinner.finish_and_clear();
            }
        }
    }

    /// Print diagnostic message to stderr when verbose
    pub fn detail(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "ℹ".cyan(), message);
        }
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        self.stop_spinner();
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output a result line to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// One-line run summary
    pub fn format_summary(
        &self,
        dismissed: usize,
        total: usize,
        kept: usize,
        skipped: usize,
    ) -> String {
        format!(
            "Dismissed {} of {} notification(s) ({} kept, {} not matching)",
            dismissed, total, kept, skipped
        )
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismissed_line_format() {
        assert_eq!(dismissed_line(7), "DISMISSED:7");
        assert_eq!(dismissed_line(4_000_000_000), "DISMISSED:4000000000");
    }

    #[test]
    fn summary_counts() {
        let presenter = Presenter::new(true);
        assert_eq!(
            presenter.format_summary(1, 3, 1, 1),
            "Dismissed 1 of 3 notification(s) (1 kept, 1 not matching)"
        );
    }

    #[test]
    fn spinner_can_stop_without_start() {
        let presenter = Presenter::default();
        presenter.stop_spinner();
        assert!(presenter.spinner.lock().unwrap().is_none());
    }
}
