//! Templates API.

use crate::client::DexlClient;
use crate::error::Result;
use crate::types::Template;

/// Templates API client.
pub struct TemplatesApi {
    client: DexlClient,
}

impl TemplatesApi {
    pub(crate) fn new(client: DexlClient) -> Self {
        Self { client }
    }

    /// Get a template by ID.
    pub async fn get(&self, id: &str) -> Result<Template> {
        self.client.template(id).await
    }
}
