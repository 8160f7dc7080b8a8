//! dexl - Discord Extreme List command-line client
//!
//! Main entry point for the dexl CLI.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dexl_client::DexlClient;

mod commands;

use commands::{records, stats, website};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// dexl - Discord Extreme List API client
#[derive(Parser)]
#[command(name = "dexl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    /// API token, sent as the Authorization header
    #[arg(long, global = true, env = "DEXL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API base URL (default: https://api.discordextremelist.xyz/v2/)
    #[arg(long, global = true, env = "DEXL_BASE_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Post guild and shard counts for a bot
    PostStats(stats::PostStatsArgs),

    /// Show website statistics
    Stats,

    /// Show website health
    Health,

    /// Look up a bot
    Bot(records::RecordArgs),

    /// Look up a server
    Server(records::RecordArgs),

    /// Look up a template
    Template(records::RecordArgs),

    /// Look up a user
    User(records::RecordArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "dexl=debug,dexl_client=debug,info"
    } else {
        "dexl=info,dexl_client=info,warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut builder = DexlClient::builder();
    if let Some(token) = cli.token {
        builder = builder.token(token);
    }
    if let Some(base_url) = cli.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    let ctx = commands::Context {
        client: builder.build()?,
        compact: cli.compact,
        verbose: cli.verbose,
    };
    tracing::debug!(client = ?ctx.client, "Client ready");

    let result = match cli.command {
        Commands::PostStats(args) => stats::run(args, &ctx).await,
        Commands::Stats => website::stats(&ctx).await,
        Commands::Health => website::health(&ctx).await,
        Commands::Bot(args) => records::bot(args, &ctx).await,
        Commands::Server(args) => records::server(args, &ctx).await,
        Commands::Template(args) => records::template(args, &ctx).await,
        Commands::User(args) => records::user(args, &ctx).await,
    };

    ctx.client.close();
    result
}
