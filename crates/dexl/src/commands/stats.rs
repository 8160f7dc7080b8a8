//! Post-stats command - reports guild and shard counts for a bot.

use anyhow::Result;
use clap::Args;
use console::Style;
use dexl_client::Error;

use super::Context;

/// Arguments for the post-stats command.
#[derive(Args, Debug)]
pub struct PostStatsArgs {
    /// Bot ID
    pub bot_id: String,

    /// Number of guilds the bot is in
    pub guilds: u64,

    /// Number of shards
    #[arg(short, long)]
    pub shards: Option<u64>,
}

/// Run the post-stats command.
pub async fn run(args: PostStatsArgs, ctx: &Context) -> Result<()> {
    match ctx
        .client
        .post_stats(&args.bot_id, args.guilds, args.shards)
        .await
    {
        Ok(()) => {
            let green = Style::new().green();
            let dim = Style::new().dim();

            eprintln!("{} Posted stats for {}", green.apply_to("✓"), args.bot_id);
            if ctx.verbose {
                eprintln!(
                    "  {} {}  {} {}",
                    dim.apply_to("Guilds:"),
                    args.guilds,
                    dim.apply_to("Shards:"),
                    args.shards.map_or_else(|| "-".to_string(), |s| s.to_string())
                );
            }
            Ok(())
        }
        Err(Error::NoToken) => {
            anyhow::bail!("The token is missing. Pass --token or set DEXL_TOKEN.")
        }
        Err(e) => Err(e.into()),
    }
}
