use async_trait::async_trait;
use log::info;
use teloxide::prelude::Requester;
use teloxide::types::ChatId;
use teloxide::Bot;
use thiserror::Error;

/// Failure to deliver a message to the chat.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("telegram send failed: {0}")]
    Send(#[from] teloxide::RequestError),
    #[error("messaging backend rejected the send: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

/// Sends through the Telegram Bot API to one fixed chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(token: &str, chat_id: i64) -> Self {
        Self {
            bot: Bot::new(token),
            chat_id: ChatId(chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        self.bot.send_message(self.chat_id, text).await?;
        info!("Delivered notice: \"{text}\"");
        Ok(())
    }
}
