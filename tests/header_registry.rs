//! Tests for the common header registry.

use dl_headers::config::{
    ACCEPT, ACCEPT_ENCODING, AUTHORIZATION, CACHE_CONTROL, COMMON_HEADERS, CONTENT_DISPOSITION,
    CONTENT_ENCODING, CONTENT_TYPE, COOKIE, PROXY_AUTHORIZATION, REFERER, RETRY_AFTER, USER_AGENT,
};
use dl_headers::{lookup, CommonHeader, HeaderError};
use reqwest::header::HeaderName;
use strum::IntoEnumIterator;

#[test]
fn test_constants_match_canonical_names() {
    assert_eq!(REFERER, "Referer");
    assert_eq!(USER_AGENT, "User-Agent");
    assert_eq!(ACCEPT, "Accept");
    assert_eq!(CONTENT_TYPE, "Content-Type");
    assert_eq!(CONTENT_DISPOSITION, "Content-Disposition");
    assert_eq!(COOKIE, "Cookie");
    assert_eq!(CONTENT_ENCODING, "Content-Encoding");
    assert_eq!(ACCEPT_ENCODING, "Accept-Encoding");
    assert_eq!(AUTHORIZATION, "Authorization");
    assert_eq!(CACHE_CONTROL, "Cache-Control");
    assert_eq!(PROXY_AUTHORIZATION, "Proxy-Authorization");
    assert_eq!(RETRY_AFTER, "Retry-After");
}

#[test]
fn test_constants_are_stable_across_reads() {
    let first: Vec<&str> = COMMON_HEADERS.to_vec();
    let second: Vec<&str> = COMMON_HEADERS.to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_registry_has_no_duplicates_ignoring_case() {
    let mut lowered: Vec<String> = COMMON_HEADERS
        .iter()
        .map(|h| h.to_ascii_lowercase())
        .collect();
    lowered.sort();
    lowered.dedup();
    assert_eq!(lowered.len(), COMMON_HEADERS.len());
}

#[test]
fn test_every_constant_is_a_valid_header_name() {
    for name in COMMON_HEADERS {
        let parsed = HeaderName::from_bytes(name.as_bytes());
        assert!(parsed.is_ok(), "{} should be a valid header name", name);
    }
}

#[test]
fn test_enum_and_constants_agree() {
    for (header, constant) in CommonHeader::iter().zip(COMMON_HEADERS) {
        assert_eq!(header.as_str(), *constant);
        assert_eq!(lookup(constant), Some(header));
        assert_eq!(HeaderName::from(header), header.header_name());
    }
}

#[test]
fn test_lookup_examples() {
    assert_eq!(lookup("user agent"), None);
    assert_eq!(lookup("USER-AGENT").map(CommonHeader::as_str), Some("User-Agent"));
    assert_eq!(lookup("cache-control").map(CommonHeader::as_str), Some("Cache-Control"));
}

#[test]
fn test_parse_unknown_header_is_error() {
    match "Set-Cookie".parse::<CommonHeader>() {
        Err(HeaderError::UnknownHeader(name)) => assert_eq!(name, "Set-Cookie"),
        other => panic!("Expected UnknownHeader, got {:?}", other),
    }
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                CommonHeader::iter()
                    .map(|h| h.to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        let names = handle.join().expect("Thread should not panic");
        assert_eq!(names, COMMON_HEADERS);
    }
}
