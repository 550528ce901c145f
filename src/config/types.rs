//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Only logging is configurable; the header registry and Cache-Control
/// values are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            log_format: DEFAULT_LOG_FORMAT,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Canonical spelling of a header name
/// dl_headers lookup user-agent
///
/// # The directive sent with every non-cacheable request
/// dl_headers no-store
///
/// # Normalise a received value
/// dl_headers parse "Max-Age=60, NO-STORE"
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "dl_headers",
    about = "Common HTTP header names and Cache-Control directives."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = DEFAULT_LOG_LEVEL)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = DEFAULT_LOG_FORMAT)]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

impl Opt {
    /// Library configuration derived from the global options.
    pub fn config(&self) -> Config {
        Config {
            log_level: self.log_level,
            log_format: self.log_format,
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every registry header name
    List {
        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical spelling of a header name (case-insensitive)
    Lookup {
        /// Header name to resolve
        name: String,
    },
    /// Print the `no-store` directive
    NoStore,
    /// Build a Cache-Control directive from flags
    CacheControl(DirectiveArgs),
    /// Parse a received Cache-Control value and print it normalised
    Parse {
        /// Raw header value, e.g. "max-age=60, no-store"
        value: String,
    },
}

/// Flags accepted by the `cache-control` subcommand.
#[derive(Debug, Default, Args)]
pub struct DirectiveArgs {
    /// Add `no-cache`
    #[arg(long)]
    pub no_cache: bool,

    /// Add `no-store`
    #[arg(long)]
    pub no_store: bool,

    /// Add `max-age=SECONDS`
    #[arg(long, value_name = "SECONDS")]
    pub max_age: Option<u32>,

    /// Add `max-stale`, optionally bounded to SECONDS
    #[arg(long, value_name = "SECONDS", num_args = 0..=1)]
    pub max_stale: Option<Option<u32>>,

    /// Add `min-fresh=SECONDS`
    #[arg(long, value_name = "SECONDS")]
    pub min_fresh: Option<u32>,

    /// Add `only-if-cached`
    #[arg(long)]
    pub only_if_cached: bool,

    /// Add `no-transform`
    #[arg(long)]
    pub no_transform: bool,

    /// Add `immutable`
    #[arg(long)]
    pub immutable: bool,
}
