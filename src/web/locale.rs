//! Locale resolution
//!
//! The active locale travels in a named cookie. Resolution is a pure
//! function of the request's cookie set: the cookie's value when present,
//! the configured fallback otherwise. Cookie absence is an expected
//! condition, not an error, and no `Accept-Language` negotiation happens.

use axum::http::{header, HeaderMap};

use crate::config::SiteConfig;

/// Resolve the locale from a raw `Cookie` header value.
///
/// Returns the cookie's value verbatim when present and non-empty,
/// otherwise the fallback.
pub fn resolve_locale(cookie_header: Option<&str>, cookie_name: &str, fallback: &str) -> String {
    cookie_header
        .and_then(|cookies| cookie_value(cookies, cookie_name))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

/// Resolve the locale from request headers using the site configuration
pub fn locale_from_headers(headers: &HeaderMap, site: &SiteConfig) -> String {
    let cookie_header = headers.get(header::COOKIE).and_then(|h| h.to_str().ok());
    resolve_locale(cookie_header, &site.locale_cookie, &site.default_locale)
}

/// Find a cookie's value in a `Cookie` header
pub fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}
