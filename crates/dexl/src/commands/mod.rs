//! CLI command handlers.

pub mod records;
pub mod stats;
pub mod website;

use anyhow::Result;
use dexl_client::DexlClient;
use serde::Serialize;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// API client.
    pub client: DexlClient,
    /// Print JSON on a single line.
    pub compact: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Print a value as JSON to stdout.
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let out = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        println!("{}", out);
        Ok(())
    }
}
