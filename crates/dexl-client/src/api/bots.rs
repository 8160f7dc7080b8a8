//! Bots API.

use crate::client::DexlClient;
use crate::error::Result;
use crate::types::Bot;

/// Bots API client.
pub struct BotsApi {
    client: DexlClient,
}

impl BotsApi {
    pub(crate) fn new(client: DexlClient) -> Self {
        Self { client }
    }

    /// Get a bot by ID.
    pub async fn get(&self, id: &str) -> Result<Bot> {
        self.client.bot(id).await
    }

    /// Post guild and shard counts for a bot. Requires a token.
    pub async fn post_stats(
        &self,
        id: &str,
        guild_count: u64,
        shard_count: Option<u64>,
    ) -> Result<()> {
        self.client.post_stats(id, guild_count, shard_count).await
    }
}
