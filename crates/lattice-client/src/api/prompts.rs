//! Prompts API.

use bytes::Bytes;

use crate::client::LatticeClient;
use crate::error::Result;
use crate::types::CreatePromptRequest;

/// Prompts API client.
pub struct PromptsApi {
    client: LatticeClient,
}

impl PromptsApi {
    pub(crate) fn new(client: LatticeClient) -> Self {
        Self { client }
    }

    /// List all prompts.
    pub async fn list(&self) -> Result<Bytes> {
        self.client.get("prompts").await
    }

    /// Get a prompt by ID.
    pub async fn get(&self, id: &str) -> Result<Bytes> {
        self.client.get(&format!("prompts/{}", id)).await
    }

    /// Create a prompt.
    pub async fn create(&self, request: &CreatePromptRequest) -> Result<Bytes> {
        self.client.post_json("prompts", request).await
    }

    /// Delete a prompt.
    pub async fn delete(&self, id: &str) -> Result<Bytes> {
        self.client.delete(&format!("prompts/{}", id)).await
    }
}
