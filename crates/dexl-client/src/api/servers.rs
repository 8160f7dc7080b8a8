//! Servers API.

use crate::client::DexlClient;
use crate::error::Result;
use crate::types::Server;

/// Servers API client.
pub struct ServersApi {
    client: DexlClient,
}

impl ServersApi {
    pub(crate) fn new(client: DexlClient) -> Self {
        Self { client }
    }

    /// Get a server by ID.
    pub async fn get(&self, id: &str) -> Result<Server> {
        self.client.server(id).await
    }
}
