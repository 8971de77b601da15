//! Utility modules: display formatting.

pub mod format;

pub use format::{format_amount, format_duration};
