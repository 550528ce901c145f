//! Application configuration and constants.
//!
//! This module provides:
//! - HTTP header name constants
//! - Cache-Control directive tokens and defaults
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Command, Config, DirectiveArgs, LogFormat, LogLevel, Opt};
