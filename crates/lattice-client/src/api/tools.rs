//! Tools API.

use bytes::Bytes;

use crate::client::LatticeClient;
use crate::error::Result;
use crate::types::CreateToolRequest;

/// Tools API client.
///
/// Tools group callable functions; functions are addressed separately under
/// `tool/functions`.
pub struct ToolsApi {
    client: LatticeClient,
}

impl ToolsApi {
    pub(crate) fn new(client: LatticeClient) -> Self {
        Self { client }
    }

    /// List all tools.
    pub async fn list(&self) -> Result<Bytes> {
        self.client.get("tools").await
    }

    /// Get a tool by ID.
    pub async fn get(&self, id: &str) -> Result<Bytes> {
        self.client.get(&format!("tools/{}", id)).await
    }

    /// Create a tool.
    pub async fn create(&self, request: &CreateToolRequest) -> Result<Bytes> {
        self.client.post_json("tools", request).await
    }

    /// Delete a tool.
    pub async fn delete(&self, id: &str) -> Result<Bytes> {
        self.client.delete(&format!("tools/{}", id)).await
    }

    /// List every function of every tool.
    pub async fn functions(&self) -> Result<Bytes> {
        self.client.get("tool/functions").await
    }

    /// Get a single function by ID.
    pub async fn function(&self, id: &str) -> Result<Bytes> {
        self.client.get(&format!("tool/functions/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_function_paths() {
        let mock = Arc::new(MockTransport::new().with_body("[]").with_body("{}"));
        let client = LatticeClient::with_transport(mock.clone());

        client.tools().functions().await.unwrap();
        client.tools().function("web_search").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].path, "tool/functions");
        assert_eq!(requests[1].path, "tool/functions/web_search");
    }

    #[tokio::test]
    async fn test_create_tool_body() {
        let mock = Arc::new(MockTransport::new().with_body("ok"));
        let client = LatticeClient::with_transport(mock.clone());

        let request = CreateToolRequest {
            id: "web".to_string(),
            description: String::new(),
            toollist: json!({"functions": ["search"]}),
        };
        client.tools().create(&request).await.unwrap();

        let sent = &mock.requests()[0];
        assert_eq!(sent.path, "tools");
        assert_eq!(sent.json()["toollist"], json!({"functions": ["search"]}));
        assert_eq!(sent.json()["description"], "");
    }
}
