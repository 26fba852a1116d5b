//! Case-insensitive text filter

use crate::domain::notification::ToastNotification;

/// Substring filter over a notification's visible text.
/// Both sides are lower-cased before comparing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    needle: String,
}

impl TextFilter {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    pub fn matches(&self, notification: &ToastNotification) -> bool {
        self.matches_text(&notification.visible_text())
    }

    fn matches_text(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }
}
