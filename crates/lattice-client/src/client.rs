//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use url::Url;

use crate::api::{AgentsApi, ChatApi, ConnectionsApi, ModelsApi, PromptsApi, ToolsApi};
use crate::error::{Error, Result};
use crate::transport::{HttpTransport, SharedTransport, JSON_CONTENT_TYPE};

/// LatticeAI API client.
///
/// Cheap to clone; all clones share one transport.
///
/// # Example
///
/// ```no_run
/// use lattice_client::LatticeClient;
///
/// # async fn example() -> lattice_client::Result<()> {
/// let client = LatticeClient::builder()
///     .base_url("http://localhost:44444/")
///     .build()?;
///
/// let models = client.models().list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LatticeClient {
    transport: SharedTransport,
}

impl LatticeClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client on top of an existing transport.
    pub fn with_transport(transport: SharedTransport) -> Self {
        Self { transport }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the agents API.
    pub fn agents(&self) -> AgentsApi {
        AgentsApi::new(self.clone())
    }

    /// Access the connections API.
    pub fn connections(&self) -> ConnectionsApi {
        ConnectionsApi::new(self.clone())
    }

    /// Access the prompts API.
    pub fn prompts(&self) -> PromptsApi {
        PromptsApi::new(self.clone())
    }

    /// Access the models API.
    pub fn models(&self) -> ModelsApi {
        ModelsApi::new(self.clone())
    }

    /// Access the tools API.
    pub fn tools(&self) -> ToolsApi {
        ToolsApi::new(self.clone())
    }

    /// Access the chat API.
    pub fn chat(&self) -> ChatApi {
        ChatApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal request helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Make a GET request.
    pub(crate) async fn get(&self, path: &str) -> Result<Bytes> {
        self.transport.get(path).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post_json<B>(&self, path: &str, body: &B) -> Result<Bytes>
    where
        B: serde::Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        self.transport
            .post(path, JSON_CONTENT_TYPE, Bytes::from(body))
            .await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<Bytes> {
        self.transport.delete(path).await
    }
}

impl std::fmt::Debug for LatticeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LatticeClient").finish_non_exhaustive()
    }
}

/// Builder for an HTTP-backed [`LatticeClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set the base URL for the server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key, sent as a bearer token. Empty keys are ignored.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = (!key.is_empty()).then_some(key);
        self
    }

    /// Set a per-request timeout. Requests wait indefinitely by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the HTTP transport without wrapping it in a client.
    pub fn build_transport(self) -> Result<HttpTransport> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        if let Some(key) = &self.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|_| Error::Config("Invalid API key".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("lattice-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(HttpTransport::new(http, base_url, self.timeout))
    }

    /// Build the client.
    pub fn build(self) -> Result<LatticeClient> {
        let transport = self.build_transport()?;
        Ok(LatticeClient::with_transport(Arc::new(transport)))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_builder_requires_base_url() {
        let result = ClientBuilder::new().build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = ClientBuilder::new().base_url("not a url").build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let transport = ClientBuilder::new()
            .base_url("http://localhost:44444/api/lattice")
            .build_transport()
            .unwrap();

        assert_eq!(
            transport.base_url().as_str(),
            "http://localhost:44444/api/lattice/"
        );
    }

    #[test]
    fn test_builder_rejects_api_key_with_newline() {
        let result = ClientBuilder::new()
            .base_url("http://localhost:44444/")
            .api_key("bad\nkey")
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_api_key_sent_as_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let client = ClientBuilder::new()
            .base_url(server.uri())
            .api_key("secret")
            .build()
            .unwrap();

        let body = client.models().list().await.unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn test_user_agent_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .and(header("user-agent", "lattice-test"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let client = ClientBuilder::new()
            .base_url(server.uri())
            .user_agent("lattice-test")
            .build()
            .unwrap();

        client.models().list().await.unwrap();
    }
}
