//! Record lookup commands - bots, servers, templates and users.

use anyhow::Result;
use clap::Args;

use super::Context;

/// Arguments for a record lookup.
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Record ID
    pub id: String,
}

/// Look up a bot.
pub async fn bot(args: RecordArgs, ctx: &Context) -> Result<()> {
    let bot = ctx.client.bots().get(&args.id).await?;
    ctx.print_json(&bot)
}

/// Look up a server.
pub async fn server(args: RecordArgs, ctx: &Context) -> Result<()> {
    let server = ctx.client.servers().get(&args.id).await?;
    ctx.print_json(&server)
}

/// Look up a template.
pub async fn template(args: RecordArgs, ctx: &Context) -> Result<()> {
    let template = ctx.client.templates().get(&args.id).await?;
    ctx.print_json(&template)
}

/// Look up a user.
pub async fn user(args: RecordArgs, ctx: &Context) -> Result<()> {
    let user = ctx.client.users().get(&args.id).await?;
    ctx.print_json(&user)
}
