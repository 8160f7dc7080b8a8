//! Users API.

use crate::client::DexlClient;
use crate::error::Result;
use crate::types::User;

/// Users API client.
pub struct UsersApi {
    client: DexlClient,
}

impl UsersApi {
    pub(crate) fn new(client: DexlClient) -> Self {
        Self { client }
    }

    /// Get a registered user by ID.
    pub async fn get(&self, id: &str) -> Result<User> {
        self.client.user(id).await
    }
}
