// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter for the [`Transport`] port.
//!
//! One client per application with a shared cookie jar, so the session and
//! CSRF cookies set by the backend on login are replayed on later calls and
//! can be read back by the gateway.

use crate::application::port::{HttpRequest, HttpResponse, Method, Transport};
use crate::error::Result;
use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use std::sync::Arc;

const USER_AGENT: &str = concat!("TravelDesk/", env!("CARGO_PKG_VERSION"));

/// Production transport backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    jar: Arc<Jar>,
}

impl ReqwestTransport {
    /// Builds a client with an empty cookie jar.
    ///
    /// No request timeout is configured; calls rely on the OS transport.
    pub fn new() -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .cookie_provider(Arc::clone(&jar))
            .build()?;
        Ok(Self { client, jar })
    }

    /// Seeds a cookie, e.g. a session id copied from a browser.
    pub fn add_cookie(&self, cookie: &str, url: &str) -> Result<()> {
        let url = url::Url::parse(url)?;
        self.jar.add_cookie_str(cookie, &url);
        Ok(())
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .request(reqwest_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }

    fn cookie_header(&self, url: &str) -> Option<String> {
        let url = url::Url::parse(url).ok()?;
        self.jar
            .cookies(&url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }
}
