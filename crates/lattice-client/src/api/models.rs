//! Models API.

use bytes::Bytes;

use crate::client::LatticeClient;
use crate::error::Result;

/// Models API client. Models are read-only from the client side.
pub struct ModelsApi {
    client: LatticeClient,
}

impl ModelsApi {
    pub(crate) fn new(client: LatticeClient) -> Self {
        Self { client }
    }

    /// List all models.
    pub async fn list(&self) -> Result<Bytes> {
        self.client.get("models").await
    }

    /// Get a model by ID.
    pub async fn get(&self, id: &str) -> Result<Bytes> {
        self.client.get(&format!("models/{}", id)).await
    }
}
