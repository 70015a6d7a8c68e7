//! Agents API.

use bytes::Bytes;

use crate::client::LatticeClient;
use crate::error::Result;
use crate::types::CreateAgentRequest;

/// Agents API client.
pub struct AgentsApi {
    client: LatticeClient,
}

impl AgentsApi {
    pub(crate) fn new(client: LatticeClient) -> Self {
        Self { client }
    }

    /// List all agents.
    pub async fn list(&self) -> Result<Bytes> {
        self.client.get("agents").await
    }

    /// Get an agent by ID.
    pub async fn get(&self, id: &str) -> Result<Bytes> {
        self.client.get(&format!("agents/{}", id)).await
    }

    /// Create an agent.
    pub async fn create(&self, request: &CreateAgentRequest) -> Result<Bytes> {
        self.client.post_json("agents", request).await
    }

    /// Delete an agent.
    pub async fn delete(&self, id: &str) -> Result<Bytes> {
        self.client.delete(&format!("agents/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_agent_paths() {
        let mock = Arc::new(
            MockTransport::new()
                .with_body("[]")
                .with_body("{}")
                .with_body("ok"),
        );
        let client = LatticeClient::with_transport(mock.clone());

        client.agents().list().await.unwrap();
        client.agents().get("a1").await.unwrap();
        client.agents().delete("a1").await.unwrap();

        let requests = mock.requests();
        assert_eq!((requests[0].method, requests[0].path.as_str()), ("GET", "agents"));
        assert_eq!((requests[1].method, requests[1].path.as_str()), ("GET", "agents/a1"));
        assert_eq!((requests[2].method, requests[2].path.as_str()), ("DELETE", "agents/a1"));
    }

    #[tokio::test]
    async fn test_create_embeds_recalltools_as_json() {
        let mock = Arc::new(MockTransport::new().with_body(r#"{"status":"created"}"#));
        let client = LatticeClient::with_transport(mock.clone());

        let request = CreateAgentRequest {
            id: "researcher".to_string(),
            prompt: "say \"hi\"".to_string(),
            recalltools: json!([{"name": "search"}]),
        };
        client.agents().create(&request).await.unwrap();

        let sent = &mock.requests()[0];
        assert_eq!(sent.path, "agents");
        assert_eq!(
            sent.json(),
            json!({
                "id": "researcher",
                "prompt": "say \"hi\"",
                "recalltools": [{"name": "search"}]
            })
        );
    }
}
