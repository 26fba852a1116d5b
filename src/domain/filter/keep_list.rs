//! Protected notifications that must never be dismissed

use crate::domain::notification::ToastNotification;

/// Why a notification was protected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeepReason {
    /// Visible text contains a protected pattern
    Text(String),
    /// App display name or visible text contains a protected app name
    App(String),
}

/// Patterns and app names whose notifications are left untouched.
///
/// Matching is case-insensitive substring containment. Text patterns are
/// checked against the visible text. App names are checked against the
/// sender's display name and also against the visible text, since many
/// senders put their name in the title or attribution line. Blank entries
/// are dropped so an empty line in a config file cannot protect everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepList {
    texts: Vec<String>,
    apps: Vec<String>,
}

impl KeepList {
    pub fn new<T, A>(texts: T, apps: A) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        Self {
            texts: normalize(texts),
            apps: normalize(apps),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.apps.is_empty()
    }

    /// Return the first rule protecting this notification, if any
    pub fn protects(&self, notification: &ToastNotification) -> Option<KeepReason> {
        if self.is_empty() {
            return None;
        }

        let text = notification.visible_text().to_lowercase();
        if let Some(pattern) = self.texts.iter().find(|p| text.contains(p.as_str())) {
            return Some(KeepReason::Text(pattern.clone()));
        }

        let app = notification.app_name().map(str::to_lowercase);
        self.apps
            .iter()
            .find(|a| {
                text.contains(a.as_str())
                    || app.as_deref().is_some_and(|name| name.contains(a.as_str()))
            })
            .map(|a| KeepReason::App(a.clone()))
    }
}

fn normalize<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
