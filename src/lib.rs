//! dismiss-toasts - clear toast notifications from the notification center
//!
//! Requests notification listener access, takes a snapshot of the current
//! toast notifications, and removes the ones matching an optional text
//! filter. Each removal is reported on stdout as `DISMISSED:<id>`; a refused
//! access request is reported as `ACCESS_DENIED`.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification snapshots, text filter, keep list, config, errors
//! - **Application**: The dismiss use case and port interfaces (traits)
//! - **Infrastructure**: WinRT listener adapter and TOML config store
//! - **CLI**: Command-line interface, argument parsing, and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
