// SPDX-License-Identifier: MPL-2.0
//! HTTP transport port definition.
//!
//! The [`Transport`] trait is the only thing the gateway knows about the
//! network. The production adapter wraps `reqwest`; tests script responses.

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// HTTP verbs used by the booking backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request, ready to go on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Header pairs in send order. Names are unique (case-insensitively).
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Looks up a header value, ignoring name case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests and exposes the cookies the server has set.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one round trip. Errors only for transport failures;
    /// any HTTP status is a successful round trip.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;

    /// Cookies that would be sent to `url`, formatted like a `Cookie`
    /// header (`a=1; b=2`). `None` when there are none.
    fn cookie_header(&self, url: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_method_is_get() {
        assert_eq!(Method::default(), Method::Get);
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let request = HttpRequest {
            method: Method::Get,
            url: "http://localhost/".into(),
            headers: vec![("Content-Type".into(), "application/json".into())],
            body: None,
        };
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("x-csrftoken"), None);
    }

    #[test]
    fn success_covers_2xx_only() {
        assert!(HttpResponse::new(200, "{}").is_success());
        assert!(HttpResponse::new(201, "{}").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(!HttpResponse::new(400, "{}").is_success());
    }
}
