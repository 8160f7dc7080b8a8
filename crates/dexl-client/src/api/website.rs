//! Website API.

use crate::client::DexlClient;
use crate::error::Result;
use crate::types::{WebsiteHealth, WebsiteStats};

/// Website API client.
///
/// Website endpoints don't require authentication.
pub struct WebsiteApi {
    client: DexlClient,
}

impl WebsiteApi {
    pub(crate) fn new(client: DexlClient) -> Self {
        Self { client }
    }

    /// Get website statistics.
    pub async fn stats(&self) -> Result<WebsiteStats> {
        self.client.website_stats().await
    }

    /// Get website health.
    pub async fn health(&self) -> Result<WebsiteHealth> {
        self.client.website_health().await
    }

    /// Simple connectivity check - returns true if the health endpoint answers with JSON.
    pub async fn is_reachable(&self) -> bool {
        self.health().await.is_ok()
    }
}
