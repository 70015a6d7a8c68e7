//! Connections API.

use bytes::Bytes;

use crate::client::LatticeClient;
use crate::error::Result;
use crate::types::CreateConnectionRequest;

/// Connections API client.
///
/// A connection points the server at an LLM backend (Ollama, OpenAI, ...).
pub struct ConnectionsApi {
    client: LatticeClient,
}

impl ConnectionsApi {
    pub(crate) fn new(client: LatticeClient) -> Self {
        Self { client }
    }

    /// List all connections.
    pub async fn list(&self) -> Result<Bytes> {
        self.client.get("connections").await
    }

    /// Get a connection by ID.
    pub async fn get(&self, id: &str) -> Result<Bytes> {
        self.client.get(&format!("connections/{}", id)).await
    }

    /// Create a connection.
    pub async fn create(&self, request: &CreateConnectionRequest) -> Result<Bytes> {
        self.client.post_json("connections", request).await
    }

    /// Delete a connection.
    pub async fn delete(&self, id: &str) -> Result<Bytes> {
        self.client.delete(&format!("connections/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockTransport, JSON_CONTENT_TYPE};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_connection_body() {
        let mock = Arc::new(MockTransport::new().with_body("ok"));
        let client = LatticeClient::with_transport(mock.clone());

        let request = CreateConnectionRequest::new("local", "", "http://localhost:11434", "");
        let body = client.connections().create(&request).await.unwrap();
        assert_eq!(&body[..], b"ok");

        let sent = &mock.requests()[0];
        assert_eq!(sent.method, "POST");
        assert_eq!(sent.path, "connections");
        assert_eq!(sent.content_type.as_deref(), Some(JSON_CONTENT_TYPE));
        assert_eq!(
            sent.json(),
            json!({
                "id": "local",
                "source": "ollama",
                "url": "http://localhost:11434",
                "api_key": ""
            })
        );
    }

    #[tokio::test]
    async fn test_get_and_delete_paths() {
        let mock = Arc::new(MockTransport::new().with_body("{}").with_body("{}"));
        let client = LatticeClient::with_transport(mock.clone());

        client.connections().get("local").await.unwrap();
        client.connections().delete("local").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].path, "connections/local");
        assert_eq!(requests[1].method, "DELETE");
        assert_eq!(requests[1].path, "connections/local");
    }
}
