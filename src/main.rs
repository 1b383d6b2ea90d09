use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::{error, info};

use hw_watchbot::config;
use hw_watchbot::notify::TelegramMessenger;
use hw_watchbot::poller::Poller;
use hw_watchbot::practicum::PracticumClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let cfg = match config::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            error!(%err, "required configuration is missing; aborting");
            return Err(err.into());
        }
    };

    let bot = Bot::new(cfg.telegram_token.clone());
    let messenger = TelegramMessenger::new(bot, ChatId(cfg.telegram_chat_id));
    let client = PracticumClient::new(cfg.practicum_token.clone());

    info!("starting homework status watcher");
    Poller::new(client, messenger, cfg.poll_interval).run().await;

    Ok(())
}
