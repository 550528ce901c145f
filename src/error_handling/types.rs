//! Error type definitions.

use log::SetLoggerError;
use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for header names and values.
#[derive(Error, Debug)]
pub enum HeaderError {
    /// The name is not part of the common header registry.
    #[error("Unknown header name: {0:?}")]
    UnknownHeader(String),

    /// A serialized directive is not a legal header value.
    #[error("Invalid header value: {0}")]
    InvalidValue(#[from] InvalidHeaderValue),
}
