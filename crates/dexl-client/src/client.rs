//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use url::Url;

use crate::api::{BotsApi, ServersApi, TemplatesApi, UsersApi, WebsiteApi};
use crate::error::{Error, Result};
use crate::types::{
    is_truthy, Bot, Server, StatsPayload, StatsResponse, Template, User, WebsiteHealth,
    WebsiteStats,
};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.discordextremelist.xyz/v2/";

/// Discord Extreme List API client.
///
/// Clones share one HTTP transport. Requests are issued one per call with no
/// retries; timeouts come from the transport unless set on the builder.
///
/// # Example
///
/// ```no_run
/// use dexl_client::DexlClient;
///
/// # async fn example() -> dexl_client::Result<()> {
/// let client = DexlClient::builder().token("secret").build()?;
///
/// client.post_stats("123", 50, Some(4)).await?;
/// let bot = client.bot("123").await?;
/// println!("{}", bot["bot"]["name"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DexlClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP transport, `None` once the client is closed.
    http: RwLock<Option<reqwest::Client>>,
    /// Base URL for API requests, always ending in `/`.
    base_url: Url,
    /// Raw `Authorization` header value.
    token: Option<HeaderValue>,
    /// Per-request timeout override.
    timeout: Option<Duration>,
}

impl std::fmt::Debug for DexlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DexlClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("has_token", &self.inner.token.is_some())
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl DexlClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client against the default base URL.
    pub fn new(token: Option<String>) -> Result<Self> {
        let builder = Self::builder();
        match token {
            Some(token) => builder.token(token).build(),
            None => builder.build(),
        }
    }

    /// Create a client without a token. Read operations work; stats posts fail.
    pub fn anonymous() -> Result<Self> {
        Self::builder().build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Whether a token is configured.
    pub fn has_token(&self) -> bool {
        self.inner.token.is_some()
    }

    /// Release the transport. Later calls on any clone fail with [`Error::Closed`].
    pub fn close(&self) {
        if self.inner.http.write().take().is_some() {
            tracing::debug!(base_url = %self.inner.base_url, "Client closed");
        }
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.http.read().is_none()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the bots API.
    pub fn bots(&self) -> BotsApi {
        BotsApi::new(self.clone())
    }

    /// Access the servers API.
    pub fn servers(&self) -> ServersApi {
        ServersApi::new(self.clone())
    }

    /// Access the templates API.
    pub fn templates(&self) -> TemplatesApi {
        TemplatesApi::new(self.clone())
    }

    /// Access the users API.
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Access the website API.
    pub fn website(&self) -> WebsiteApi {
        WebsiteApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Post guild and shard counts for a bot.
    ///
    /// Fails with [`Error::NoToken`] before any request when no token is
    /// configured, and with [`Error::InvalidStats`] when the service flags
    /// the post as an error. A shard count of zero is not sent.
    pub async fn post_stats(
        &self,
        bot_id: &str,
        guild_count: u64,
        shard_count: Option<u64>,
    ) -> Result<()> {
        let token = self.inner.token.clone().ok_or(Error::NoToken)?;
        let payload = StatsPayload::new(guild_count, shard_count);
        let url = self.url(&format!("bot/{}/stats", bot_id))?;

        tracing::debug!(%url, guild_count, shard_count = ?payload.shard_count, "POST stats");

        let request = self
            .transport()?
            .post(url)
            .header(AUTHORIZATION, token)
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(&payload)?);
        let result: StatsResponse = self.send(request).await?;

        if is_truthy(result.get("error")) {
            tracing::warn!(bot_id, response = %result, "Stats post rejected");
            return Err(Error::InvalidStats { response: result });
        }

        Ok(())
    }

    /// Get website statistics.
    pub async fn website_stats(&self) -> Result<WebsiteStats> {
        self.get("/stats").await
    }

    /// Get website health.
    pub async fn website_health(&self) -> Result<WebsiteHealth> {
        self.get("/health").await
    }

    /// Get a listed bot.
    pub async fn bot(&self, bot_id: &str) -> Result<Bot> {
        self.get(&format!("bot/{}", bot_id)).await
    }

    /// Get a listed server.
    pub async fn server(&self, server_id: &str) -> Result<Server> {
        self.get(&format!("server/{}", server_id)).await
    }

    /// Get a listed template.
    pub async fn template(&self, template_id: &str) -> Result<Template> {
        self.get(&format!("template/{}", template_id)).await
    }

    /// Get a registered user.
    pub async fn user(&self, user_id: &str) -> Result<User> {
        self.get(&format!("user/{}", user_id)).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Current transport handle, or [`Error::Closed`].
    fn transport(&self) -> Result<reqwest::Client> {
        self.inner.http.read().clone().ok_or(Error::Closed)
    }

    /// Make an unauthenticated GET request. The body is returned verbatim,
    /// whatever the status code.
    async fn get(&self, path: &str) -> Result<Value> {
        let url = self.url(path)?;
        tracing::debug!(%url, "GET");
        let request = self.transport()?.get(url);
        self.send(request).await
    }

    /// Send a request and parse the body as JSON.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let request = match self.inner.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Response received");

        // Parse the raw bytes so invalid UTF-8 is rejected rather than replaced
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Builder for creating a DexlClient.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    http: Option<reqwest::Client>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API token, sent verbatim as the `Authorization` header.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Use an existing HTTP client instead of creating one.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Set a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom user agent. Ignored when an HTTP client is supplied.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<DexlClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        // Empty tokens count as missing
        let token = match self.token.filter(|t| !t.is_empty()) {
            Some(token) => {
                let mut value = HeaderValue::from_str(&token)
                    .map_err(|_| Error::Config("Invalid token".to_string()))?;
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        let http = match self.http {
            Some(http) => http,
            None => {
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| format!("dexl-client/{}", env!("CARGO_PKG_VERSION")));
                reqwest::Client::builder().user_agent(user_agent).build()?
            }
        };

        Ok(DexlClient {
            inner: Arc::new(ClientInner {
                http: RwLock::new(Some(http)),
                base_url,
                token,
                timeout: self.timeout,
            }),
        })
    }
}
