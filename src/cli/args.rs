//! CLI argument definitions using Clap

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::domain::config::AppConfig;
use crate::domain::filter::{KeepList, TextFilter};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "DISMISS_TOASTS_CONFIG";

/// dismiss-toasts - clear toast notifications from the notification center
#[derive(Parser, Debug)]
#[command(name = "dismiss-toasts")]
#[command(version)]
#[command(about = "Dismiss toast notifications from the Windows notification center")]
#[command(long_about = None)]
pub struct Cli {
    /// Only dismiss notifications whose text contains FILTER (case-insensitive)
    #[arg(value_name = "FILTER")]
    pub filter: Option<String>,

    /// Never dismiss notifications whose text contains TEXT (repeatable)
    #[arg(short = 'k', long, value_name = "TEXT")]
    pub keep: Vec<String>,

    /// Never dismiss notifications sent by APP (repeatable)
    #[arg(long, value_name = "APP")]
    pub keep_app: Vec<String>,

    /// Pause between removals, in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Config file path
    #[arg(long, value_name = "PATH", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Print diagnostics to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Config values given on the command line, for merging over the file
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            keep: non_empty(&self.keep),
            keep_apps: non_empty(&self.keep_app),
            dismiss_delay_ms: self.delay_ms,
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

/// Parsed dismiss options
#[derive(Debug, Clone)]
pub struct DismissOptions {
    pub filter: Option<TextFilter>,
    pub keep: KeepList,
    pub delay: Duration,
}

impl DismissOptions {
    /// Combine the positional filter with the merged config
    pub fn new(filter: Option<&str>, config: &AppConfig) -> Self {
        Self {
            filter: filter.map(TextFilter::new),
            keep: config.keep_list(),
            delay: config.dismiss_delay_or_default(),
        }
    }
}
