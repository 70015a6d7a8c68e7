//! Request/response transport.
//!
//! [`Transport`] is the seam between the typed APIs and the network. The
//! production implementation is [`HttpTransport`] (reqwest); tests use
//! [`MockTransport`] to script replies and inspect what was sent.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use url::Url;

use crate::error::Result;

/// Content type for JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A unary request/response transport addressed by paths relative to a base
/// URL.
///
/// Implementations return the response body for any answer the server gives;
/// only failures to exchange a request at all are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch a resource.
    async fn get(&self, path: &str) -> Result<Bytes>;

    /// Send a body with the given content type.
    async fn post(&self, path: &str, content_type: &str, body: Bytes) -> Result<Bytes>;

    /// Delete a resource.
    async fn delete(&self, path: &str) -> Result<Bytes>;
}

/// A transport that can be shared across API handles.
pub type SharedTransport = Arc<dyn Transport>;

// ─────────────────────────────────────────────────────────────────────────────
// HTTP Transport
// ─────────────────────────────────────────────────────────────────────────────

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP client carrying default headers (auth, user agent).
    http: reqwest::Client,
    /// Base URL every path is joined onto. Always ends with `/`.
    base_url: Url,
    /// Optional per-request timeout.
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub(crate) fn new(http: reqwest::Client, base_url: Url, timeout: Option<Duration>) -> Self {
        Self {
            http,
            base_url,
            timeout,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a URL for a resource path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        tracing::debug!(%method, %url, "sending request");
        let builder = self.http.request(method, url);
        Ok(match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        })
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Bytes> {
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await?;

        if status.is_success() {
            tracing::debug!(%url, %status, bytes = body.len(), "received response");
        } else {
            tracing::debug!(%url, %status, "server returned an error status");
        }

        Ok(body)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Bytes> {
        let builder = self.request(Method::GET, path)?;
        self.send(builder).await
    }

    async fn post(&self, path: &str, content_type: &str, body: Bytes) -> Result<Bytes> {
        let builder = self
            .request(Method::POST, path)?
            .header(CONTENT_TYPE, content_type)
            .body(body);
        self.send(builder).await
    }

    async fn delete(&self, path: &str) -> Result<Bytes> {
        let builder = self.request(Method::DELETE, path)?;
        self.send(builder).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mock Transport
// ─────────────────────────────────────────────────────────────────────────────

/// A request captured by [`MockTransport`].
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    /// `GET`, `POST` or `DELETE`.
    pub method: &'static str,
    /// Path as given by the caller.
    pub path: String,
    /// Content type (POST only).
    pub content_type: Option<String>,
    /// Request body (empty for GET/DELETE).
    pub body: Bytes,
}

#[cfg(any(test, feature = "testing"))]
impl MockRequest {
    /// Decode the body as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

/// A transport that replays scripted replies.
///
/// Replies are returned in order, one per request. When the script runs
/// out, every further request fails with a transport error.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: parking_lot::Mutex<std::collections::VecDeque<Result<Bytes>>>,
    request_log: parking_lot::Mutex<Vec<MockRequest>>,
}

#[cfg(any(test, feature = "testing"))]
impl MockTransport {
    /// Create a mock with no scripted replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw reply body.
    pub fn with_body(self, body: impl Into<Bytes>) -> Self {
        self.replies.lock().push_back(Ok(body.into()));
        self
    }

    /// Queue a JSON reply body.
    pub fn with_json(self, value: serde_json::Value) -> Self {
        self.with_body(value.to_string())
    }

    /// Queue a transport failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.replies
            .lock()
            .push_back(Err(crate::Error::Transport(message.into())));
        self
    }

    /// Get all requests made so far.
    pub fn requests(&self) -> Vec<MockRequest> {
        self.request_log.lock().clone()
    }

    /// Get the number of requests made.
    pub fn request_count(&self) -> usize {
        self.request_log.lock().len()
    }

    fn record(&self, request: MockRequest) -> Result<Bytes> {
        self.request_log.lock().push(request);
        self.replies.lock().pop_front().unwrap_or_else(|| {
            Err(crate::Error::Transport(
                "MockTransport: no more replies available".to_string(),
            ))
        })
    }
}

#[cfg(any(test, feature = "testing"))]
#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str) -> Result<Bytes> {
        self.record(MockRequest {
            method: "GET",
            path: path.to_string(),
            content_type: None,
            body: Bytes::new(),
        })
    }

    async fn post(&self, path: &str, content_type: &str, body: Bytes) -> Result<Bytes> {
        self.record(MockRequest {
            method: "POST",
            path: path.to_string(),
            content_type: Some(content_type.to_string()),
            body,
        })
    }

    async fn delete(&self, path: &str) -> Result<Bytes> {
        self.record(MockRequest {
            method: "DELETE",
            path: path.to_string(),
            content_type: None,
            body: Bytes::new(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
