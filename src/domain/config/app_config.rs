//! Application configuration value object

use std::time::Duration;

use serde::Deserialize;

use crate::domain::filter::KeepList;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Text patterns whose notifications are never dismissed
    pub keep: Option<Vec<String>>,
    /// App names whose notifications are never dismissed
    pub keep_apps: Option<Vec<String>>,
    /// Pause between consecutive removals
    pub dismiss_delay_ms: Option<u64>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            keep: Some(Vec::new()),
            keep_apps: Some(Vec::new()),
            dismiss_delay_ms: Some(0),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    ///
    /// Scalars are overridden by non-None values from other. Keep lists are
    /// appended so CLI patterns add to the ones in the config file.
    pub fn merge(self, other: Self) -> Self {
        Self {
            keep: merge_lists(self.keep, other.keep),
            keep_apps: merge_lists(self.keep_apps, other.keep_apps),
            dismiss_delay_ms: other.dismiss_delay_ms.or(self.dismiss_delay_ms),
        }
    }

    /// Build the keep list from both pattern sets
    pub fn keep_list(&self) -> KeepList {
        KeepList::new(
            self.keep.iter().flatten(),
            self.keep_apps.iter().flatten(),
        )
    }

    /// Get dismiss delay, or zero if not set
    pub fn dismiss_delay_or_default(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms.unwrap_or(0))
    }
}

fn merge_lists(base: Option<Vec<String>>, other: Option<Vec<String>>) -> Option<Vec<String>> {
    match (base, other) {
        (None, None) => None,
        (Some(b), None) => Some(b),
        (None, Some(o)) => Some(o),
        (Some(mut b), Some(o)) => {
            for item in o {
                if !b.contains(&item) {
                    b.push(item);
                }
            }
            Some(b)
        }
    }
}
