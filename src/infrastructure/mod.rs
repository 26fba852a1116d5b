//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS notification center and the config file.

pub mod config;
pub mod listener;

// Re-export adapters
pub use config::FileConfigStore;
pub use listener::create_listener;
