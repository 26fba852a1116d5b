//! Notification listener infrastructure module
//!
//! Uses the WinRT user notification listener on Windows. Other platforms
//! have no equivalent API and get an adapter that reports unsupported.

#[cfg(not(windows))]
mod unsupported;
#[cfg(windows)]
mod winrt;

#[cfg(not(windows))]
pub use unsupported::UnsupportedListener;
#[cfg(windows)]
pub use winrt::WinRtListener;

use crate::application::ports::NotificationListener;

/// Create the notification listener for the current platform
pub fn create_listener() -> Box<dyn NotificationListener> {
    #[cfg(windows)]
    {
        Box::new(WinRtListener::new())
    }

    #[cfg(not(windows))]
    {
        Box::new(UnsupportedListener::new())
    }
}
