//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting,
//! and the main application runner.

pub mod app;
pub mod args;
pub mod presenter;

// Re-export commonly used types
pub use app::{load_merged_config, run_dismiss, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, DismissOptions};
pub use presenter::{dismissed_line, Presenter, ACCESS_DENIED};
