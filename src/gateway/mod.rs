// SPDX-License-Identifier: MPL-2.0
//! Request gateway for the booking backend.
//!
//! Every call goes through [`Gateway::request`], which adds the JSON content
//! type and the CSRF token, sends the request through a [`Transport`] and
//! turns the response into an [`Outcome`]. Backend rejections are normalized
//! into a single readable message (see [`normalize`]).
//!
//! # Example
//!
//! ```ignore
//! let gateway = Gateway::new(transport, "http://127.0.0.1:8000", "csrftoken")?;
//! match gateway.request("/api/bookings/", RequestOptions::get()).await? {
//!     Outcome::Success(body) => println!("{body}"),
//!     Outcome::Failure(rejection) => eprintln!("{rejection}"),
//! }
//! ```

pub mod cookies;
pub mod normalize;

pub use cookies::read_cookie;
pub use normalize::{normalize_error, FALLBACK_MESSAGE};

use crate::application::port::{HttpRequest, Method, Transport};
use crate::config::defaults::CSRF_HEADER;
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use url::Url;

const CONTENT_TYPE: &str = "Content-Type";
const JSON_MEDIA_TYPE: &str = "application/json";

/// A non-2xx answer from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: u16,
    /// Normalized display message.
    pub message: String,
    /// Individual field messages the display message was joined from.
    pub details: Vec<String>,
}

impl Rejection {
    /// Builds a rejection from a decoded error body.
    #[must_use]
    pub fn from_body(status: u16, body: &Value) -> Self {
        let normalized = normalize::normalize(body);
        Self {
            status,
            message: normalized.message,
            details: normalized.details,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of a completed round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 2xx with the parsed body, unchanged.
    Success(Value),
    Failure(Rejection),
}

impl Outcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Folds a failure into [`Error::Rejected`].
    pub fn into_result(self) -> Result<Value> {
        match self {
            Outcome::Success(body) => Ok(body),
            Outcome::Failure(rejection) => Err(Error::Rejected(rejection)),
        }
    }
}

/// Per-request options. Defaults to a bodiless GET.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    /// Extra headers. They override the defaults, ignoring name case.
    pub headers: Vec<(String, String)>,
    /// Already serialized request body.
    pub body: Option<String>,
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post() -> Self {
        Self {
            method: Method::Post,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Serializes `payload` as the JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self> {
        self.body = Some(serde_json::to_string(payload)?);
        Ok(self)
    }
}

/// Sends requests to one backend.
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
    base_url: Url,
    csrf_cookie: String,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url.as_str())
            .field("csrf_cookie", &self.csrf_cookie)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// Creates a gateway for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if `base_url` is not an absolute URL.
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: &str,
        csrf_cookie: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            transport,
            base_url: Url::parse(base_url)?,
            csrf_cookie: csrf_cookie.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an endpoint path (or absolute URL) against the base URL.
    pub fn resolve(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Current CSRF token for `url`, if the server has set one.
    #[must_use]
    pub fn csrf_token(&self, url: &str) -> Option<String> {
        self.transport
            .cookie_header(url)
            .and_then(|header| read_cookie(&header, &self.csrf_cookie))
    }

    /// Performs one round trip.
    ///
    /// Any HTTP status yields `Ok`: 2xx as [`Outcome::Success`] with the
    /// parsed body, everything else as [`Outcome::Failure`] with the
    /// normalized message.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] when no response arrived, [`Error::Decode`] when
    /// the body (of any status) is not JSON, [`Error::Url`] when the
    /// endpoint cannot be resolved.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Outcome> {
        let url = self.resolve(endpoint)?;

        let mut headers = vec![(CONTENT_TYPE.to_string(), JSON_MEDIA_TYPE.to_string())];
        if let Some(token) = self.csrf_token(url.as_str()) {
            headers.push((CSRF_HEADER.to_string(), token));
        }
        for (name, value) in options.headers {
            merge_header(&mut headers, name, value);
        }

        let request = HttpRequest {
            method: options.method,
            url: url.into(),
            headers,
            body: options.body,
        };
        log::debug!("{} {}", request.method, request.url);

        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request).await?;

        let body: Value = serde_json::from_slice(&response.body).map_err(|err| {
            log::warn!("{method} {url}: undecodable body (status {})", response.status);
            Error::from(err)
        })?;

        if response.is_success() {
            return Ok(Outcome::Success(body));
        }

        let rejection = Rejection::from_body(response.status, &body);
        log::warn!(
            "{method} {url} rejected with {}: {}",
            rejection.status,
            rejection.message
        );
        Ok(Outcome::Failure(rejection))
    }
}

/// Replaces a header with the same name (any case) or appends it.
fn merge_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    match headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
    {
        Some(slot) => *slot = (name, value),
        None => headers.push((name, value)),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedTransport;
    use super::*;
    use serde_json::json;

    fn gateway(transport: &Arc<ScriptedTransport>) -> Gateway {
        Gateway::new(transport.clone(), "http://127.0.0.1:8000", "csrftoken").unwrap()
    }

    #[tokio::test]
    async fn success_returns_body_unchanged() {
        let body = r#"{"bookings":[{"id":1}],"next":null}"#;
        let transport = Arc::new(ScriptedTransport::new().respond(200, body));

        let outcome = gateway(&transport)
            .request("/api/bookings/", RequestOptions::get())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Success(json!({"bookings": [{"id": 1}], "next": null}))
        );
        let sent = transport.sent();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "http://127.0.0.1:8000/api/bookings/");
        assert_eq!(sent[0].body, None);
    }

    #[tokio::test]
    async fn sets_json_content_type_and_csrf_token() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .with_cookies("sessionid=abc; csrftoken=tok%2B1")
                .respond(201, "{}"),
        );

        gateway(&transport)
            .request(
                "/api/bookings/",
                RequestOptions::post().json(&json!({"travel_option": 3})).unwrap(),
            )
            .await
            .unwrap();

        let sent = &transport.sent()[0];
        assert_eq!(sent.header("content-type"), Some("application/json"));
        assert_eq!(sent.header("X-CSRFToken"), Some("tok+1"));
        assert_eq!(sent.body.as_deref(), Some(r#"{"travel_option":3}"#));
    }

    #[tokio::test]
    async fn omits_csrf_header_without_cookie() {
        let transport = Arc::new(ScriptedTransport::new().respond(200, "[]"));

        gateway(&transport)
            .request("/api/travel-search/", RequestOptions::get())
            .await
            .unwrap();

        assert_eq!(transport.sent()[0].header("X-CSRFToken"), None);
    }

    #[tokio::test]
    async fn caller_headers_override_defaults_ignoring_case() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .with_cookies("csrftoken=abc")
                .respond(200, "{}"),
        );

        gateway(&transport)
            .request(
                "/api/login/",
                RequestOptions::post()
                    .header("content-type", "application/vnd.api+json")
                    .header("Accept", "application/json"),
            )
            .await
            .unwrap();

        let sent = &transport.sent()[0];
        let content_types: Vec<_> = sent
            .headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .collect();
        assert_eq!(content_types.len(), 1);
        assert_eq!(sent.header("Content-Type"), Some("application/vnd.api+json"));
        assert_eq!(sent.header("X-CSRFToken"), Some("abc"));
        assert_eq!(sent.header("accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn non_2xx_is_normalized_into_failure() {
        let transport = Arc::new(
            ScriptedTransport::new().respond(400, r#"{"error": "Booking cannot be cancelled"}"#),
        );

        let outcome = gateway(&transport)
            .request("/api/bookings/4/cancel/", RequestOptions::post())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Failure(Rejection {
                status: 400,
                message: "Booking cannot be cancelled".into(),
                details: Vec::new(),
            })
        );
    }

    #[tokio::test]
    async fn validation_errors_keep_details() {
        let transport = Arc::new(ScriptedTransport::new().respond(
            400,
            r#"{"name": [{"string": "Required"}], "age": ["Must be positive"]}"#,
        ));

        let outcome = gateway(&transport)
            .request("/api/bookings/", RequestOptions::post())
            .await
            .unwrap();

        match outcome {
            Outcome::Failure(rejection) => {
                assert_eq!(rejection.message, "Required. Must be positive");
                assert_eq!(rejection.details, vec!["Required", "Must be positive"]);
            }
            Outcome::Success(_) => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn unparseable_body_is_a_decode_error() {
        let transport = Arc::new(
            ScriptedTransport::new().respond(500, "<html>Internal Server Error</html>"),
        );

        let result = gateway(&transport)
            .request("/api/bookings/", RequestOptions::get())
            .await;

        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let transport = Arc::new(ScriptedTransport::new().fail("connection refused"));

        let result = gateway(&transport)
            .request("/api/bookings/", RequestOptions::get())
            .await;

        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[test]
    fn into_result_maps_failure_to_rejected() {
        let rejection = Rejection::from_body(403, &json!({}));
        assert_eq!(rejection.message, FALLBACK_MESSAGE);

        let result = Outcome::Failure(rejection).into_result();
        assert!(matches!(result, Err(Error::Rejected(r)) if r.status == 403));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let transport = Arc::new(ScriptedTransport::new());
        let result = Gateway::new(transport, "not a url", "csrftoken");
        assert!(matches!(result, Err(Error::Url(_))));
    }
}
