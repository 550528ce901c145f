//! dl_headers library: common HTTP header names and Cache-Control directives
//!
//! This library provides the header vocabulary used by the downloader's HTTP
//! layer: a registry of canonical header names (as string constants and as the
//! typed [`CommonHeader`]) and a [`CacheControl`] value whose [`no_store`]
//! preset marks responses that must never be persisted.
//!
//! # Example
//!
//! ```
//! use dl_headers::config::{CACHE_CONTROL, USER_AGENT};
//! use dl_headers::{lookup, no_store, CommonHeader};
//!
//! assert_eq!(USER_AGENT, "User-Agent");
//! assert_eq!(lookup("cache-control"), Some(CommonHeader::CacheControl));
//! assert_eq!(format!("{}: {}", CACHE_CONTROL, no_store()), "Cache-Control: no-store");
//! ```
//!
//! Everything here is immutable and freely shared across threads. The crate
//! never performs network I/O.

#![warn(missing_docs)]

mod cache_control;
pub mod config;
mod error_handling;
mod headers;
pub mod initialization;
mod request;

// Re-export public API
pub use cache_control::{no_store, CacheControl, CacheControlBuilder};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{HeaderError, InitializationError};
pub use headers::{lookup, CommonHeader};
pub use request::CacheControlExt;
