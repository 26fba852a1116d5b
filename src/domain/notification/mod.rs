//! Notification domain module

mod access;
mod toast;

pub use access::ListenerAccess;
pub use toast::ToastNotification;
