//! Website commands - statistics and health.

use anyhow::Result;

use super::Context;

/// Print website statistics.
pub async fn stats(ctx: &Context) -> Result<()> {
    let stats = ctx.client.website().stats().await?;
    ctx.print_json(&stats)
}

/// Print website health.
pub async fn health(ctx: &Context) -> Result<()> {
    let health = ctx.client.website().health().await?;
    ctx.print_json(&health)
}
