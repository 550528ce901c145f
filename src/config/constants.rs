//! Configuration constants.
//!
//! Cache-Control directive tokens and defaults shared by the builder, the
//! parser and the CLI.

use crate::config::types::{LogFormat, LogLevel};

// Request directives
/// Forces validation with the origin before a cached response is used
pub const DIRECTIVE_NO_CACHE: &str = "no-cache";
/// Forbids storing any part of the request or response
pub const DIRECTIVE_NO_STORE: &str = "no-store";
/// Maximum acceptable age of a cached response, in seconds
pub const DIRECTIVE_MAX_AGE: &str = "max-age";
/// Accept a stale response, optionally bounded in seconds
pub const DIRECTIVE_MAX_STALE: &str = "max-stale";
/// Response must stay fresh for at least this many seconds
pub const DIRECTIVE_MIN_FRESH: &str = "min-fresh";
/// Only a cached response is acceptable
pub const DIRECTIVE_ONLY_IF_CACHED: &str = "only-if-cached";
/// Intermediaries must not transform the payload
pub const DIRECTIVE_NO_TRANSFORM: &str = "no-transform";
/// Response body will not change while fresh
pub const DIRECTIVE_IMMUTABLE: &str = "immutable";

// Response-only directives (recognised when parsing)
/// Shared-cache maximum age, in seconds
pub const DIRECTIVE_S_MAXAGE: &str = "s-maxage";
/// Response is for a single user
pub const DIRECTIVE_PRIVATE: &str = "private";
/// Response may be stored by shared caches
pub const DIRECTIVE_PUBLIC: &str = "public";
/// Stale responses must be revalidated
pub const DIRECTIVE_MUST_REVALIDATE: &str = "must-revalidate";

/// Separator placed between serialized directives.
pub const DIRECTIVE_SEPARATOR: &str = ", ";

/// Upper bound for any directive duration.
/// Larger values (and `max-stale` without an argument) clamp to this.
pub const MAX_DIRECTIVE_SECONDS: u32 = u32::MAX;

/// Default log level for the CLI.
/// Kept at `Warn` so command output is not interleaved with log lines.
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Warn;
/// Default log format for the CLI
pub const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Plain;
