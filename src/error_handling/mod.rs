//! Error handling.
//!
//! Library errors are `thiserror` enums; the binary wraps them in `anyhow`.

mod types;

// Re-export public API
pub use types::{HeaderError, InitializationError};
