//! Notification selection rules

mod keep_list;
mod text_filter;

pub use keep_list::{KeepList, KeepReason};
pub use text_filter::TextFilter;
