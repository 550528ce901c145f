//! Cache-Control directives.
//!
//! [`CacheControl`] is an immutable set of directives. Request directives are
//! set through [`CacheControlBuilder`]; received values are read back with
//! [`CacheControl::parse`] or [`CacheControl::from_headers`].
//!
//! The downloader sends [`no_store`] with every request whose response must
//! never be persisted.

mod builder;
mod parse;

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue};

use crate::config::{
    DIRECTIVE_IMMUTABLE, DIRECTIVE_MAX_AGE, DIRECTIVE_MAX_STALE, DIRECTIVE_MIN_FRESH,
    DIRECTIVE_MUST_REVALIDATE, DIRECTIVE_NO_CACHE, DIRECTIVE_NO_STORE, DIRECTIVE_NO_TRANSFORM,
    DIRECTIVE_ONLY_IF_CACHED, DIRECTIVE_PRIVATE, DIRECTIVE_PUBLIC, DIRECTIVE_SEPARATOR,
    DIRECTIVE_S_MAXAGE, MAX_DIRECTIVE_SECONDS,
};
use crate::error_handling::HeaderError;
use crate::headers::CommonHeader;

pub use builder::CacheControlBuilder;

/// A parsed or built `Cache-Control` value.
///
/// Durations are whole seconds, clamped to [`MAX_DIRECTIVE_SECONDS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CacheControl {
    no_cache: bool,
    no_store: bool,
    max_age_seconds: Option<u32>,
    s_max_age_seconds: Option<u32>,
    is_private: bool,
    is_public: bool,
    must_revalidate: bool,
    max_stale_seconds: Option<u32>,
    min_fresh_seconds: Option<u32>,
    only_if_cached: bool,
    no_transform: bool,
    immutable: bool,
}

/// Returns a directive forbidding any cache from storing the request or response.
///
/// Built fresh on each call; serializes to exactly `no-store`.
///
/// # Examples
///
/// ```
/// assert_eq!(dl_headers::no_store().to_string(), "no-store");
/// ```
pub fn no_store() -> CacheControl {
    CacheControl::builder().no_store().build()
}

impl CacheControl {
    /// Starts an empty builder.
    pub fn builder() -> CacheControlBuilder {
        CacheControlBuilder::default()
    }

    /// `no-cache`: always validate with the origin.
    pub fn force_network() -> Self {
        Self::builder().no_cache().build()
    }

    /// `only-if-cached, max-stale=<max>`: never touch the network.
    pub fn force_cache() -> Self {
        Self::builder().only_if_cached().max_stale_unbounded().build()
    }

    /// True when no directive is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `no-cache` is set.
    pub fn no_cache(&self) -> bool {
        self.no_cache
    }

    /// `no-store` is set.
    pub fn no_store(&self) -> bool {
        self.no_store
    }

    /// `max-age`, in seconds.
    pub fn max_age_seconds(&self) -> Option<u32> {
        self.max_age_seconds
    }

    /// `s-maxage`, in seconds. Only present on parsed responses.
    pub fn s_max_age_seconds(&self) -> Option<u32> {
        self.s_max_age_seconds
    }

    /// `private` is set. Only present on parsed responses.
    pub fn is_private(&self) -> bool {
        self.is_private
    }

    /// `public` is set. Only present on parsed responses.
    pub fn is_public(&self) -> bool {
        self.is_public
    }

    /// `must-revalidate` is set. Only present on parsed responses.
    pub fn must_revalidate(&self) -> bool {
        self.must_revalidate
    }

    /// `Some(MAX_DIRECTIVE_SECONDS)` when any staleness is accepted.
    pub fn max_stale_seconds(&self) -> Option<u32> {
        self.max_stale_seconds
    }

    /// `min-fresh`, in seconds.
    pub fn min_fresh_seconds(&self) -> Option<u32> {
        self.min_fresh_seconds
    }

    /// `only-if-cached` is set.
    pub fn only_if_cached(&self) -> bool {
        self.only_if_cached
    }

    /// `no-transform` is set.
    pub fn no_transform(&self) -> bool {
        self.no_transform
    }

    /// `immutable` is set.
    pub fn immutable(&self) -> bool {
        self.immutable
    }

    /// Serializes into a header value.
    ///
    /// # Errors
    ///
    /// Returns `HeaderError::InvalidValue` if the serialization is not a legal
    /// header value. Directive tokens are plain ASCII, so this does not happen
    /// for values produced by this crate.
    pub fn to_header_value(&self) -> Result<HeaderValue, HeaderError> {
        Ok(HeaderValue::from_str(&self.to_string())?)
    }

    /// Sets this value as the only `Cache-Control` header in `headers`.
    ///
    /// An empty value removes the header instead.
    ///
    /// # Errors
    ///
    /// Propagates [`CacheControl::to_header_value`] failures.
    pub fn insert_into(&self, headers: &mut HeaderMap) -> Result<(), HeaderError> {
        let name = CommonHeader::CacheControl.header_name();
        if self.is_empty() {
            headers.remove(name);
        } else {
            headers.insert(name, self.to_header_value()?);
        }
        Ok(())
    }
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.no_cache, DIRECTIVE_NO_CACHE, None),
            (self.no_store, DIRECTIVE_NO_STORE, None),
            (false, DIRECTIVE_MAX_AGE, self.max_age_seconds),
            (false, DIRECTIVE_S_MAXAGE, self.s_max_age_seconds),
            (self.is_private, DIRECTIVE_PRIVATE, None),
            (self.is_public, DIRECTIVE_PUBLIC, None),
            (self.must_revalidate, DIRECTIVE_MUST_REVALIDATE, None),
            (false, DIRECTIVE_MAX_STALE, self.max_stale_seconds),
            (false, DIRECTIVE_MIN_FRESH, self.min_fresh_seconds),
            (self.only_if_cached, DIRECTIVE_ONLY_IF_CACHED, None),
            (self.no_transform, DIRECTIVE_NO_TRANSFORM, None),
            (self.immutable, DIRECTIVE_IMMUTABLE, None),
        ];

        let mut first = true;
        for (set, token, seconds) in flags {
            if !set && seconds.is_none() {
                continue;
            }
            if !first {
                f.write_str(DIRECTIVE_SEPARATOR)?;
            }
            first = false;
            match seconds {
                Some(s) => write!(f, "{}={}", token, s)?,
                None => f.write_str(token)?,
            }
        }
        Ok(())
    }
}

/// Converts a duration to whole directive seconds, clamping at the maximum.
fn clamp_seconds(seconds: u64) -> u32 {
    u32::try_from(seconds).unwrap_or(MAX_DIRECTIVE_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_no_store_serializes_to_single_directive() {
        let cc = no_store();
        assert_eq!(cc.to_string(), "no-store");
        assert!(cc.no_store());
        assert_eq!(
            cc,
            CacheControl {
                no_store: true,
                ..CacheControl::default()
            }
        );
    }

    #[test]
    fn test_no_store_is_stable_across_calls() {
        assert_eq!(no_store(), no_store());
        assert_eq!(no_store().to_string(), no_store().to_string());
    }

    #[test]
    fn test_empty_serializes_to_empty_string() {
        let cc = CacheControl::default();
        assert!(cc.is_empty());
        assert_eq!(cc.to_string(), "");
    }

    #[test]
    fn test_presets() {
        assert_eq!(CacheControl::force_network().to_string(), "no-cache");
        assert_eq!(
            CacheControl::force_cache().to_string(),
            format!("max-stale={}, only-if-cached", u32::MAX)
        );
    }

    #[test]
    fn test_directive_order_is_fixed() {
        let cc = CacheControl::builder()
            .immutable()
            .min_fresh(Duration::from_secs(5))
            .no_transform()
            .max_age(Duration::from_secs(60))
            .no_store()
            .no_cache()
            .build();
        assert_eq!(
            cc.to_string(),
            "no-cache, no-store, max-age=60, min-fresh=5, no-transform, immutable"
        );
    }

    #[test]
    fn test_to_header_value() {
        let value = no_store().to_header_value().expect("Should be a valid header value");
        assert_eq!(value, HeaderValue::from_static("no-store"));
    }

    #[test]
    fn test_insert_into_replaces_existing_header() {
        let mut headers = HeaderMap::new();
        headers.append("cache-control", HeaderValue::from_static("max-age=5"));
        headers.append("cache-control", HeaderValue::from_static("public"));

        no_store().insert_into(&mut headers).expect("Should insert");
        let values: Vec<_> = headers.get_all("cache-control").iter().collect();
        assert_eq!(values, vec![&HeaderValue::from_static("no-store")]);

        CacheControl::default()
            .insert_into(&mut headers)
            .expect("Should remove");
        assert!(headers.get("cache-control").is_none());
    }

    #[test]
    fn test_clamp_seconds() {
        assert_eq!(clamp_seconds(0), 0);
        assert_eq!(clamp_seconds(42), 42);
        assert_eq!(clamp_seconds(u64::MAX), u32::MAX);
    }
}
