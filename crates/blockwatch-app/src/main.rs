//! blockwatch: polls a Minecraft server and announces joins and leaves.
//!
//! `blockwatch watch` runs the reconciliation loop against the configured
//! server, delivering presence changes to a Discord webhook (or the log
//! when none is configured). `blockwatch status` does one query and prints
//! a point-in-time summary.

mod cli;
mod fetcher;
mod notify;
mod summary;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use blockwatch_config::WatchConfig;
use blockwatch_core::{FetchError, PresenceWatcher, StatusFetcher};

use crate::fetcher::SlpFetcher;
use crate::notify::{DiscordWebhookSink, LogSink};

#[tokio::main]
async fn main() {
    let args = cli::parse();

    let default_filter = args.log_level.clone().unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = match blockwatch_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    match args.command.unwrap_or(cli::Command::Watch) {
        cli::Command::Watch => run_watch(config).await,
        cli::Command::Status => {
            if let Err(e) = run_status(config).await {
                eprintln!("❌ Could not connect to server: {e}");
                std::process::exit(1);
            }
        }
    }
}

async fn run_watch(config: WatchConfig) {
    let fetcher = SlpFetcher::new(
        config.server.address.clone(),
        Duration::from_secs(config.server.timeout),
    );
    let interval = Duration::from_secs(config.server.poll_interval);

    tracing::info!(
        server = %config.server.address,
        webhook = config.discord.enabled(),
        "watching for presence changes"
    );

    if config.discord.enabled() {
        let sink = DiscordWebhookSink::new(&config.discord.webhook_url);
        PresenceWatcher::new(fetcher, sink, interval).run().await;
    } else {
        PresenceWatcher::new(fetcher, LogSink, interval).run().await;
    }
}

/// One-off status query. Reads nothing from, and writes nothing to, the
/// watcher's tracked roster.
async fn run_status(config: WatchConfig) -> Result<(), FetchError> {
    let fetcher = SlpFetcher::new(
        config.server.address.clone(),
        Duration::from_secs(config.server.timeout),
    );
    let snapshot = fetcher.fetch().await?;

    print!("{}", summary::format_summary(&snapshot));

    if config.discord.enabled() {
        let sink = DiscordWebhookSink::new(&config.discord.webhook_url);
        if let Err(e) = sink.post_summary(&snapshot).await {
            tracing::warn!(error = %e, "failed to post status summary to webhook");
        }
    }
    Ok(())
}
