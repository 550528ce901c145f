//! Lenient parsing of received Cache-Control values.

use std::num::IntErrorKind;

use log::debug;
use reqwest::header::HeaderMap;

use super::CacheControl;
use crate::config::{
    DIRECTIVE_IMMUTABLE, DIRECTIVE_MAX_AGE, DIRECTIVE_MAX_STALE, DIRECTIVE_MIN_FRESH,
    DIRECTIVE_MUST_REVALIDATE, DIRECTIVE_NO_CACHE, DIRECTIVE_NO_STORE, DIRECTIVE_NO_TRANSFORM,
    DIRECTIVE_ONLY_IF_CACHED, DIRECTIVE_PRIVATE, DIRECTIVE_PUBLIC, DIRECTIVE_S_MAXAGE,
    MAX_DIRECTIVE_SECONDS, PRAGMA,
};
use crate::headers::CommonHeader;

impl CacheControl {
    /// Parses a `Cache-Control` header value.
    ///
    /// Never fails: directive names match case-insensitively, arguments may be
    /// quoted, and unknown directives or malformed numbers are skipped.
    /// Negative durations read as zero; overflowing ones clamp to the maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use dl_headers::CacheControl;
    ///
    /// let cc = CacheControl::parse("Max-Age=\"60\", NO-STORE, x-vendor=1");
    /// assert_eq!(cc.to_string(), "no-store, max-age=60");
    /// ```
    pub fn parse(value: &str) -> Self {
        let mut cc = Self::default();
        for (name, arg) in split_directives(value) {
            cc.apply(name, arg);
        }
        cc
    }

    /// Merges every `Cache-Control` header of a message into one value.
    ///
    /// `Pragma: no-cache` is honoured as `no-cache`. Values that are not
    /// visible ASCII are skipped.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut cc = Self::default();
        for value in headers.get_all(CommonHeader::CacheControl.header_name()) {
            match value.to_str() {
                Ok(value) => {
                    for (name, arg) in split_directives(value) {
                        cc.apply(name, arg);
                    }
                }
                Err(e) => debug!("Skipping non-ASCII Cache-Control value: {}", e),
            }
        }

        let pragma_no_cache = headers
            .get_all(PRAGMA)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(split_directives)
            .any(|(name, _)| name.eq_ignore_ascii_case(DIRECTIVE_NO_CACHE));
        if pragma_no_cache {
            cc.no_cache = true;
        }
        cc
    }

    fn apply(&mut self, name: &str, arg: Option<&str>) {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            DIRECTIVE_NO_CACHE => self.no_cache = true,
            DIRECTIVE_NO_STORE => self.no_store = true,
            DIRECTIVE_MAX_AGE => self.max_age_seconds = parse_seconds(&name, arg),
            DIRECTIVE_S_MAXAGE => self.s_max_age_seconds = parse_seconds(&name, arg),
            DIRECTIVE_PRIVATE => self.is_private = true,
            DIRECTIVE_PUBLIC => self.is_public = true,
            DIRECTIVE_MUST_REVALIDATE => self.must_revalidate = true,
            DIRECTIVE_MAX_STALE => {
                self.max_stale_seconds = match arg {
                    None => Some(MAX_DIRECTIVE_SECONDS),
                    Some(_) => parse_seconds(&name, arg),
                }
            }
            DIRECTIVE_MIN_FRESH => self.min_fresh_seconds = parse_seconds(&name, arg),
            DIRECTIVE_ONLY_IF_CACHED => self.only_if_cached = true,
            DIRECTIVE_NO_TRANSFORM => self.no_transform = true,
            DIRECTIVE_IMMUTABLE => self.immutable = true,
            _ => debug!("Ignoring unknown Cache-Control directive {:?}", name),
        }
    }
}

/// Splits a header value into `(name, argument)` pairs.
///
/// Quoted arguments may contain commas; the quotes are stripped. Empty
/// directives (`a,,b`) are dropped.
fn split_directives(value: &str) -> Vec<(&str, Option<&str>)> {
    let mut directives = Vec::new();
    let mut rest = value;

    while !rest.is_empty() {
        let end = rest.find([',', '=']).unwrap_or(rest.len());
        let name = rest[..end].trim();
        let mut arg = None;
        rest = &rest[end..];

        if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            if let Some(quoted) = after_eq.strip_prefix('"') {
                let close = quoted.find('"').unwrap_or(quoted.len());
                arg = Some(&quoted[..close]);
                let tail = quoted.get(close + 1..).unwrap_or("");
                rest = tail.find(',').map_or("", |i| &tail[i..]);
            } else {
                let close = after_eq.find(',').unwrap_or(after_eq.len());
                arg = Some(after_eq[..close].trim());
                rest = &after_eq[close..];
            }
        }

        rest = rest.strip_prefix(',').unwrap_or(rest);
        if !name.is_empty() {
            directives.push((name, arg));
        }
    }

    directives
}

fn parse_seconds(directive: &str, arg: Option<&str>) -> Option<u32> {
    let Some(raw) = arg else {
        debug!("Cache-Control directive {:?} is missing its value", directive);
        return None;
    };
    match raw.trim().parse::<i64>() {
        Ok(n) if n < 0 => Some(0),
        Ok(n) => Some(u32::try_from(n).unwrap_or(MAX_DIRECTIVE_SECONDS)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(MAX_DIRECTIVE_SECONDS),
            IntErrorKind::NegOverflow => Some(0),
            _ => {
                debug!(
                    "Ignoring malformed Cache-Control value {}={:?}",
                    directive, raw
                );
                None
            }
        },
    }
}
