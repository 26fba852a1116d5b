//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod dismiss;
pub mod ports;

// Re-export use cases
pub use dismiss::{
    DismissCallbacks, DismissError, DismissInput, DismissNotificationsUseCase, DismissOutcome,
    DismissReport,
};
