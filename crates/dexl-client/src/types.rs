//! Request and response types for the Discord Extreme List API.
//!
//! Records returned by the service are passed through as raw JSON. Only the
//! stats-post body has a fixed shape on our side.

use serde::Serialize;
use serde_json::Value;

/// Website-wide statistics (`GET /stats`).
pub type WebsiteStats = Value;

/// Website health report (`GET /health`).
pub type WebsiteHealth = Value;

/// A listed bot (`GET bot/{id}`).
pub type Bot = Value;

/// A listed server (`GET server/{id}`).
pub type Server = Value;

/// A listed template (`GET template/{id}`).
pub type Template = Value;

/// A registered user (`GET user/{id}`).
pub type User = Value;

/// Raw response to a stats post.
pub type StatsResponse = Value;

/// Body of a stats post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPayload {
    /// Number of guilds the bot is in.
    pub guild_count: u64,
    /// Number of shards, omitted from the body when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard_count: Option<u64>,
}

impl StatsPayload {
    /// Build a payload. A shard count of zero is treated as absent.
    pub fn new(guild_count: u64, shard_count: Option<u64>) -> Self {
        Self {
            guild_count,
            shard_count: shard_count.filter(|&n| n != 0),
        }
    }
}

/// JSON truthiness as the service's `error` flag is interpreted.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}
