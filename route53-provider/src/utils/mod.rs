//! Utility module

pub mod datetime;
pub mod log_sanitizer;
