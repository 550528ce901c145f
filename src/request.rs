//! Request-side helpers for `reqwest`.

use log::trace;
use reqwest::RequestBuilder;

use crate::cache_control::{no_store, CacheControl};
use crate::headers::CommonHeader;

/// Attaches Cache-Control directives to an outgoing request.
///
/// Header errors are deferred to `RequestBuilder::build`, as with any other
/// `reqwest` header.
pub trait CacheControlExt: Sized {
    /// Appends `cache_control` as a `Cache-Control` header. Empty values add nothing.
    fn cache_control(self, cache_control: &CacheControl) -> Self;

    /// Appends `Cache-Control: no-store`.
    fn no_store(self) -> Self {
        self.cache_control(&no_store())
    }
}

impl CacheControlExt for RequestBuilder {
    fn cache_control(self, cache_control: &CacheControl) -> Self {
        if cache_control.is_empty() {
            return self;
        }
        trace!("Setting Cache-Control: {}", cache_control);
        self.header(
            CommonHeader::CacheControl.header_name(),
            cache_control.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .build()
            .expect("Failed to build test client")
    }

    #[test]
    fn test_no_store_sets_single_header() {
        let request = client()
            .get("http://example.com/chapter/1")
            .no_store()
            .build()
            .expect("Should build request");

        let values: Vec<_> = request.headers().get_all("cache-control").iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "no-store");
    }

    #[test]
    fn test_empty_directive_adds_nothing() {
        let request = client()
            .get("http://example.com/")
            .cache_control(&CacheControl::default())
            .build()
            .expect("Should build request");

        assert!(request.headers().get("cache-control").is_none());
    }

    #[test]
    fn test_custom_directive() {
        let cc = CacheControl::builder()
            .max_age(Duration::from_secs(0))
            .no_transform()
            .build();
        let request = client()
            .post("http://example.com/api")
            .cache_control(&cc)
            .build()
            .expect("Should build request");

        assert_eq!(
            request.headers().get("Cache-Control").map(|v| v.as_bytes()),
            Some(&b"max-age=0, no-transform"[..])
        );
    }
}
