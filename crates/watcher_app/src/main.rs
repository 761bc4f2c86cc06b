//! Review-status watcher binary: wires configuration, logging, and the
//! poll loop.

mod config;
mod runner;

use anyhow::Context;
use log::{error, info};
use watcher_engine::{FetchSettings, ReqwestFetcher, TelegramNotifier};
use watcher_logging::LogDestination;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; deployments set the variables directly.
    let _ = dotenvy::dotenv();
    watcher_logging::initialize(LogDestination::Terminal);

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            // The only fatal path: never enter the loop without credentials.
            error!("Cannot start: {err}");
            return Err(err.into());
        }
    };
    info!(
        "Watching {} every {} seconds",
        config.endpoint,
        config.poll_interval.as_secs()
    );

    let fetcher = ReqwestFetcher::new(FetchSettings::new(&config.endpoint, &config.api_token))
        .context("cannot build the HTTP client")?;
    let notifier = TelegramNotifier::new(&config.bot_token, config.chat_id);

    runner::run(&fetcher, &notifier, config.poll_interval).await;
    Ok(())
}
