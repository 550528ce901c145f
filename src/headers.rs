//! Typed view of the common header registry.
//!
//! [`CommonHeader`] mirrors the string constants in [`crate::config`] one to
//! one, so callers can iterate the registry, resolve a name case-insensitively
//! and hand a typed [`HeaderName`] to `reqwest`.

use std::fmt;
use std::str::FromStr;

use log::trace;
use reqwest::header::{self, HeaderName};
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter};

use crate::config;
use crate::error_handling::HeaderError;

/// A header from the common registry.
///
/// Variants are declared in registry order; `CommonHeader::iter()` yields
/// them in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum CommonHeader {
    /// `Referer`
    Referer,
    /// `User-Agent`
    UserAgent,
    /// `Accept`
    Accept,
    /// `Content-Type`
    ContentType,
    /// `Content-Disposition`
    ContentDisposition,
    /// `Cookie`
    Cookie,
    /// `Content-Encoding`
    ContentEncoding,
    /// `Accept-Encoding`
    AcceptEncoding,
    /// `Authorization`
    Authorization,
    /// `Cache-Control`
    CacheControl,
    /// `Proxy-Authorization`
    ProxyAuthorization,
    /// `Retry-After`
    RetryAfter,
}

impl CommonHeader {
    /// Canonical spelling, identical to the matching constant in [`crate::config`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Referer => config::REFERER,
            Self::UserAgent => config::USER_AGENT,
            Self::Accept => config::ACCEPT,
            Self::ContentType => config::CONTENT_TYPE,
            Self::ContentDisposition => config::CONTENT_DISPOSITION,
            Self::Cookie => config::COOKIE,
            Self::ContentEncoding => config::CONTENT_ENCODING,
            Self::AcceptEncoding => config::ACCEPT_ENCODING,
            Self::Authorization => config::AUTHORIZATION,
            Self::CacheControl => config::CACHE_CONTROL,
            Self::ProxyAuthorization => config::PROXY_AUTHORIZATION,
            Self::RetryAfter => config::RETRY_AFTER,
        }
    }

    /// Typed header name for `reqwest`. Lower-cased, as `http` stores all names.
    pub fn header_name(self) -> HeaderName {
        match self {
            Self::Referer => header::REFERER,
            Self::UserAgent => header::USER_AGENT,
            Self::Accept => header::ACCEPT,
            Self::ContentType => header::CONTENT_TYPE,
            Self::ContentDisposition => header::CONTENT_DISPOSITION,
            Self::Cookie => header::COOKIE,
            Self::ContentEncoding => header::CONTENT_ENCODING,
            Self::AcceptEncoding => header::ACCEPT_ENCODING,
            Self::Authorization => header::AUTHORIZATION,
            Self::CacheControl => header::CACHE_CONTROL,
            Self::ProxyAuthorization => header::PROXY_AUTHORIZATION,
            Self::RetryAfter => header::RETRY_AFTER,
        }
    }
}

/// Resolves a header name against the registry, ignoring ASCII case.
///
/// Returns `None` for names outside the registry.
///
/// # Examples
///
/// ```
/// use dl_headers::{lookup, CommonHeader};
///
/// assert_eq!(lookup("user-agent"), Some(CommonHeader::UserAgent));
/// assert_eq!(lookup("X-Requested-With"), None);
/// ```
pub fn lookup(name: &str) -> Option<CommonHeader> {
    let name = name.trim();
    let found = CommonHeader::iter().find(|h| h.as_str().eq_ignore_ascii_case(name));
    if found.is_none() {
        trace!("Header {:?} is not in the common registry", name);
    }
    found
}

impl FromStr for CommonHeader {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).ok_or_else(|| HeaderError::UnknownHeader(s.to_string()))
    }
}

impl fmt::Display for CommonHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CommonHeader> for HeaderName {
    fn from(h: CommonHeader) -> Self {
        h.header_name()
    }
}

impl Serialize for CommonHeader {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CommonHeader {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
