//! HTTP header name constants.
//!
//! Canonical spellings of the request and response headers the downloader
//! reads or sets. Matching is case-insensitive on the wire; the spelling here
//! is the one we emit.

// Request identification
/// Referer header (page the request originates from)
pub const REFERER: &str = "Referer";
/// User-Agent header (client identification)
pub const USER_AGENT: &str = "User-Agent";

// Content negotiation
/// Accept header
pub const ACCEPT: &str = "Accept";
/// Accept-Encoding header
pub const ACCEPT_ENCODING: &str = "Accept-Encoding";

// Entity description
/// Content-Type header
pub const CONTENT_TYPE: &str = "Content-Type";
/// Content-Disposition header (suggested file name for downloads)
pub const CONTENT_DISPOSITION: &str = "Content-Disposition";
/// Content-Encoding header
pub const CONTENT_ENCODING: &str = "Content-Encoding";

// Credentials
/// Cookie header
pub const COOKIE: &str = "Cookie";
/// Authorization header
pub const AUTHORIZATION: &str = "Authorization";
/// Proxy-Authorization header
pub const PROXY_AUTHORIZATION: &str = "Proxy-Authorization";

// Caching and throttling
/// Cache-Control header
pub const CACHE_CONTROL: &str = "Cache-Control";
/// Retry-After header (sent with 429 and 503 responses)
pub const RETRY_AFTER: &str = "Retry-After";

/// Legacy HTTP/1.0 cache header, read only as a `no-cache` fallback.
pub const PRAGMA: &str = "Pragma";

/// All registry headers, in declaration order.
///
/// Kept in the same order as [`crate::CommonHeader`] variants.
pub const COMMON_HEADERS: &[&str] = &[
    REFERER,
    USER_AGENT,
    ACCEPT,
    CONTENT_TYPE,
    CONTENT_DISPOSITION,
    COOKIE,
    CONTENT_ENCODING,
    ACCEPT_ENCODING,
    AUTHORIZATION,
    CACHE_CONTROL,
    PROXY_AUTHORIZATION,
    RETRY_AFTER,
];
