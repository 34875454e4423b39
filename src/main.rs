mod dedup;
mod digest;
mod extract;
mod filter;
mod models;
mod normalize;
mod notify;
mod poll;
mod scrapers;

use clap::Parser;
use notify::TelegramNotifier;
use poll::Watcher;
use scrapers::OlxBrowserProvider;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, Level};

/// Watch OLX for new land-plot listings in one city and push a digest
/// of first-seen offers to a Telegram chat.
#[derive(Parser, Debug)]
#[command(name = "plot-scout")]
struct Args {
    /// City to search (e.g. warszawa, krakow)
    #[arg(short, long, default_value = "warszawa")]
    city: String,

    /// Seconds to sleep between poll cycles
    #[arg(short, long, default_value = "300")]
    interval: u64,

    /// Seconds to wait for the listing grid to render before treating
    /// a cycle as empty
    #[arg(long, default_value = "10")]
    wait: u64,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_BOT_TOKEN")]
    telegram_token: String,

    /// Telegram chat to deliver digests to
    #[arg(long, env = "TELEGRAM_CHAT_ID", default_value = "822088787")]
    chat_id: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let args = Args::parse();
    let city = args.city.to_lowercase();

    info!("🚀 Plot Scout - OLX land-plot watcher");
    info!("Watching city: {}", city);
    info!("Poll interval: {}s", args.interval);

    let provider = OlxBrowserProvider::new(Duration::from_secs(args.wait))?;
    let notifier = TelegramNotifier::new(args.telegram_token, args.chat_id)?;

    let watcher = Watcher::new(
        city,
        Duration::from_secs(args.interval),
        Box::new(provider),
        Box::new(notifier),
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(());
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(());
        }
    });

    watcher.run(shutdown_rx).await
}
