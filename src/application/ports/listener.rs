//! Notification listener port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::{ListenerAccess, ToastNotification};

/// Notification listener errors
#[derive(Debug, Clone, Error)]
pub enum ListenerError {
    #[error("Notification listener is not supported on this platform")]
    Unsupported,

    #[error("Failed to request notification access: {0}")]
    AccessRequest(String),

    #[error("Failed to list notifications: {0}")]
    Listing(String),

    #[error("Failed to remove notification {id}: {message}")]
    Removal { id: u32, message: String },
}

/// Port for the OS notification center
#[async_trait]
pub trait NotificationListener: Send + Sync {
    /// Request access to the listener capability.
    ///
    /// May suspend indefinitely while the OS prompts the user.
    async fn request_access(&self) -> Result<ListenerAccess, ListenerError>;

    /// Snapshot of the toast notifications currently in the notification center.
    ///
    /// Notifications arriving after the snapshot are not included.
    async fn toast_notifications(&self) -> Result<Vec<ToastNotification>, ListenerError>;

    /// Remove a notification from the notification center by id.
    async fn remove(&self, id: u32) -> Result<(), ListenerError>;
}

/// Blanket implementation for boxed listener types
#[async_trait]
impl NotificationListener for Box<dyn NotificationListener> {
    async fn request_access(&self) -> Result<ListenerAccess, ListenerError> {
        self.as_ref().request_access().await
    }

    async fn toast_notifications(&self) -> Result<Vec<ToastNotification>, ListenerError> {
        self.as_ref().toast_notifications().await
    }

    async fn remove(&self, id: u32) -> Result<(), ListenerError> {
        self.as_ref().remove(id).await
    }
}
