//! Listener access status

use std::fmt;

/// Permission state for the notification listener capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerAccess {
    Allowed,
    Denied,
    Unspecified,
}

impl ListenerAccess {
    /// Only `Allowed` grants access; `Denied` and `Unspecified` are treated alike
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

impl fmt::Display for ListenerAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed => write!(f, "allowed"),
            Self::Denied => write!(f, "denied"),
            Self::Unspecified => write!(f, "unspecified"),
        }
    }
}
