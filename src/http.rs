//! Blocking HTTP request helpers.
//!
//! Each call builds a fresh client, issues one request and tears the
//! connection down: no pooling, no retries. Transport failures come back as
//! a structured [`HttpError`] instead of a panic; a non-2xx status is not a
//! failure, the raw body is returned either way.

use std::time::Duration;

use log::{debug, warn};

/// Timeout applied when the caller does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

/// Per-call overrides. A set field takes precedence over the built-in
/// default; an unset field falls back to it.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
    pub headers: Vec<(String, String)>,
}

/// Structured transport error: a cURL-style numeric code plus the underlying
/// message.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpError {
    pub errno: i64,
    pub error: String,
}

fn transport_error(err: reqwest::Error) -> HttpError {
    let errno = if err.is_timeout() {
        28
    } else if err.is_connect() {
        7
    } else if err.is_builder() {
        3
    } else {
        1
    };
    HttpError {
        errno,
        error: err.to_string(),
    }
}

fn build_client(options: &RequestOptions) -> Result<reqwest::blocking::Client, HttpError> {
    let mut builder =
        reqwest::blocking::Client::builder().timeout(options.timeout.unwrap_or(DEFAULT_TIMEOUT));
    if let Some(user_agent) = &options.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    builder.build().map_err(transport_error)
}

/// Form-encodes key/value pairs the way PHP's `http_build_query` does:
/// unreserved bytes pass through, spaces become `+`, the rest is
/// percent-encoded.
pub fn build_query(pairs: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (key, value) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(&url_encode(key));
        out.push('=');
        out.push_str(&url_encode(value));
    }
    out
}

fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' => out.push(b as char),
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// http_get - Sends a blocking GET request and returns the raw response
/// body.
///
/// The query pairs are appended to the URL; a `?` is inserted only when the
/// URL does not already carry one. When it does, the pairs are appended
/// directly with no `&` separator, matching the original helper byte for
/// byte.
pub fn http_get(
    url: &str,
    query: &[(&str, &str)],
    options: &RequestOptions,
) -> Result<String, HttpError> {
    let separator = if url.contains('?') { "" } else { "?" };
    let full_url = format!("{}{}{}", url, separator, build_query(query));
    debug!("GET {}", full_url);

    let client = build_client(options)?;
    let mut request = client.get(&full_url);
    for (name, value) in &options.headers {
        request = request.header(name.as_str(), value.as_str());
    }
    let response = request.send().map_err(|err| {
        warn!("GET {} failed: {}", full_url, err);
        transport_error(err)
    })?;
    response.text().map_err(transport_error)
}

/// http_post - Sends a blocking POST request with a form-encoded body and
/// returns the raw response body.
pub fn http_post(
    url: &str,
    form: &[(&str, &str)],
    options: &RequestOptions,
) -> Result<String, HttpError> {
    debug!("POST {}", url);

    let client = build_client(options)?;
    let mut request = client
        .post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(build_query(form));
    for (name, value) in &options.headers {
        request = request.header(name.as_str(), value.as_str());
    }
    let response = request.send().map_err(|err| {
        warn!("POST {} failed: {}", url, err);
        transport_error(err)
    })?;
    response.text().map_err(transport_error)
}
