//! WinRT notification listener adapter
//!
//! Uses `Windows.UI.Notifications.Management.UserNotificationListener`.

use async_trait::async_trait;
use windows::UI::Notifications::Management::{
    UserNotificationListener, UserNotificationListenerAccessStatus,
};
use windows::UI::Notifications::{NotificationKinds, UserNotification};

use crate::application::ports::{ListenerError, NotificationListener};
use crate::domain::notification::{ListenerAccess, ToastNotification};

/// Notification listener backed by the WinRT `UserNotificationListener`
pub struct WinRtListener;

impl WinRtListener {
    /// Create a new WinRT listener adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for WinRtListener {
    fn default() -> Self {
        Self::new()
    }
}

fn map_access(status: UserNotificationListenerAccessStatus) -> ListenerAccess {
    if status == UserNotificationListenerAccessStatus::Allowed {
        ListenerAccess::Allowed
    } else if status == UserNotificationListenerAccessStatus::Denied {
        ListenerAccess::Denied
    } else {
        ListenerAccess::Unspecified
    }
}

/// Copy a WinRT notification into a plain snapshot so no COM object
/// leaves the blocking thread
fn snapshot(notification: &UserNotification) -> windows::core::Result<ToastNotification> {
    let id = notification.Id()?;
    let visual = notification.Notification()?.Visual()?;

    let bindings = visual.Bindings()?;
    let mut texts = Vec::with_capacity(bindings.Size()? as usize);
    for i in 0..bindings.Size()? {
        let elements = bindings.GetAt(i)?.GetTextElements()?;
        let mut binding = Vec::with_capacity(elements.Size()? as usize);
        for j in 0..elements.Size()? {
            binding.push(elements.GetAt(j)?.Text()?.to_string_lossy());
        }
        texts.push(binding);
    }

    let toast = ToastNotification::new(id, texts);

    // Some senders have no resolvable app info
    let app_name = notification
        .AppInfo()
        .and_then(|info| info.DisplayInfo())
        .and_then(|display| display.DisplayName())
        .map(|name| name.to_string_lossy())
        .ok()
        .filter(|name| !name.is_empty());

    Ok(match app_name {
        Some(name) => toast.with_app_name(name),
        None => toast,
    })
}

#[async_trait]
impl NotificationListener for WinRtListener {
    async fn request_access(&self) -> Result<ListenerAccess, ListenerError> {
        // IAsyncOperation::get blocks until the OS resolves the prompt
        tokio::task::spawn_blocking(|| {
            let listener = UserNotificationListener::Current()
                .map_err(|e| ListenerError::AccessRequest(e.to_string()))?;
            let status = listener
                .RequestAccessAsync()
                .and_then(|op| op.get())
                .map_err(|e| ListenerError::AccessRequest(e.to_string()))?;
            Ok(map_access(status))
        })
        .await
        .map_err(|e| ListenerError::AccessRequest(format!("Task join error: {}", e)))?
    }

    async fn toast_notifications(&self) -> Result<Vec<ToastNotification>, ListenerError> {
        tokio::task::spawn_blocking(|| {
            let listener = UserNotificationListener::Current()
                .map_err(|e| ListenerError::Listing(e.to_string()))?;
            let view = listener
                .GetNotificationsAsync(NotificationKinds::Toast)
                .and_then(|op| op.get())
                .map_err(|e| ListenerError::Listing(e.to_string()))?;

            let size = view
                .Size()
                .map_err(|e| ListenerError::Listing(e.to_string()))?;
            let mut notifications = Vec::with_capacity(size as usize);
            for i in 0..size {
                let toast = view
                    .GetAt(i)
                    .and_then(|n| snapshot(&n))
                    .map_err(|e| ListenerError::Listing(e.to_string()))?;
                notifications.push(toast);
            }
            Ok(notifications)
        })
        .await
        .map_err(|e| ListenerError::Listing(format!("Task join error: {}", e)))?
    }

    async fn remove(&self, id: u32) -> Result<(), ListenerError> {
        tokio::task::spawn_blocking(move || {
            UserNotificationListener::Current()
                .and_then(|listener| listener.RemoveNotification(id))
                .map_err(|e| ListenerError::Removal {
                    id,
                    message: e.to_string(),
                })
        })
        .await
        .map_err(|e| ListenerError::Removal {
            id,
            message: format!("Task join error: {}", e),
        })?
    }
}
