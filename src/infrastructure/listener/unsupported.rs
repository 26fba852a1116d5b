//! Listener adapter for platforms without a notification listener API

use async_trait::async_trait;

use crate::application::ports::{ListenerError, NotificationListener};
use crate::domain::notification::{ListenerAccess, ToastNotification};

/// Listener that fails every call with [`ListenerError::Unsupported`]
pub struct UnsupportedListener;

impl UnsupportedListener {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnsupportedListener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationListener for UnsupportedListener {
    async fn request_access(&self) -> Result<ListenerAccess, ListenerError> {
        Err(ListenerError::Unsupported)
    }

    async fn toast_notifications(&self) -> Result<Vec<ToastNotification>, ListenerError> {
        Err(ListenerError::Unsupported)
    }

    async fn remove(&self, _id: u32) -> Result<(), ListenerError> {
        Err(ListenerError::Unsupported)
    }
}
