//! Builder for request Cache-Control directives.

use std::time::Duration;

use super::{clamp_seconds, CacheControl};
use crate::config::MAX_DIRECTIVE_SECONDS;

/// Builds a [`CacheControl`] for an outgoing request.
///
/// Only request directives are exposed. Setting the same directive twice
/// keeps the last value.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use dl_headers::CacheControl;
///
/// let cc = CacheControl::builder()
///     .no_transform()
///     .max_age(Duration::from_secs(600))
///     .build();
/// assert_eq!(cc.to_string(), "max-age=600, no-transform");
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct CacheControlBuilder {
    inner: CacheControl,
}

impl CacheControlBuilder {
    /// Adds `no-cache`.
    pub fn no_cache(mut self) -> Self {
        self.inner.no_cache = true;
        self
    }

    /// Adds `no-store`.
    pub fn no_store(mut self) -> Self {
        self.inner.no_store = true;
        self
    }

    /// Adds `max-age`. Sub-second precision is dropped.
    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.inner.max_age_seconds = Some(clamp_seconds(max_age.as_secs()));
        self
    }

    /// Adds `max-stale` bounded to `max_stale`.
    pub fn max_stale(mut self, max_stale: Duration) -> Self {
        self.inner.max_stale_seconds = Some(clamp_seconds(max_stale.as_secs()));
        self
    }

    /// Adds `max-stale` accepting any staleness.
    pub fn max_stale_unbounded(mut self) -> Self {
        self.inner.max_stale_seconds = Some(MAX_DIRECTIVE_SECONDS);
        self
    }

    /// Adds `min-fresh`.
    pub fn min_fresh(mut self, min_fresh: Duration) -> Self {
        self.inner.min_fresh_seconds = Some(clamp_seconds(min_fresh.as_secs()));
        self
    }

    /// Adds `only-if-cached`.
    pub fn only_if_cached(mut self) -> Self {
        self.inner.only_if_cached = true;
        self
    }

    /// Adds `no-transform`.
    pub fn no_transform(mut self) -> Self {
        self.inner.no_transform = true;
        self
    }

    /// Adds `immutable`.
    pub fn immutable(mut self) -> Self {
        self.inner.immutable = true;
        self
    }

    /// Finishes the value.
    pub fn build(self) -> CacheControl {
        self.inner
    }
}
