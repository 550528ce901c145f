//! Application initialization.
//!
//! Only the process-wide logger needs setting up; everything else in the
//! crate is constant.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
