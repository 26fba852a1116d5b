//! Toast notification snapshot value object

/// Separator appended after every text element when building visible text
const TEXT_SEPARATOR: char = ' ';

/// A toast notification as observed in the OS notification center.
///
/// This is a plain snapshot: the OS owns the real record, and the only
/// mutation the program can request is removal by [`ToastNotification::id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastNotification {
    id: u32,
    app_name: Option<String>,
    bindings: Vec<Vec<String>>,
}

impl ToastNotification {
    /// Create a notification with its visual bindings.
    ///
    /// Each binding is an ordered list of text element strings.
    pub fn new(id: u32, bindings: Vec<Vec<String>>) -> Self {
        Self {
            id,
            app_name: None,
            bindings,
        }
    }

    /// Attach the display name of the sending app
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Convenience constructor for a single binding
    pub fn from_texts<I, S>(id: u32, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(id, vec![texts.into_iter().map(Into::into).collect()])
    }

    /// OS identifier used for removal
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Display name of the sending app, if the OS exposed one
    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    /// All text elements concatenated in binding order then element order,
    /// each followed by a single space.
    pub fn visible_text(&self) -> String {
        let mut text = String::new();
        for element in self.bindings.iter().flatten() {
            text.push_str(element);
            text.push(TEXT_SEPARATOR);
        }
        text
    }
}
