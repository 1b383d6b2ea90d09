use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::{error, info};

/// Destination-bound message transport. The production impl talks to
/// Telegram; tests substitute a recording one.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}

pub struct TelegramMessenger {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramMessenger {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send(&self, text: &str) -> Result<()> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }
}

/// Deliver one message. Delivery failure is logged and swallowed here;
/// callers never see it and nothing retries.
pub async fn send_message<M: Messenger + ?Sized>(messenger: &M, text: &str) {
    match messenger.send(text).await {
        Ok(()) => info!(text, "sent message to Telegram"),
        Err(err) => error!(?err, text, "failed to send message to Telegram"),
    }
}
