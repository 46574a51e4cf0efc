//! Utility modules.

/// Log sanitization helpers keeping tokens and large bodies out of logs.
pub mod log_sanitizer;
