//! Configuration storage adapters

mod file;

pub use file::{FileConfigStore, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
