//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, Result};
use std::path::Path;
use teloxide::payloads::SendPhotoSetters;
use teloxide::{prelude::*, types::ChatId, types::InputFile};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, path: &Path, caption: Option<&str>) -> Result<()> {
        let mut request = self
            .bot
            .send_photo(ChatId(chat.id), InputFile::file(path.to_path_buf()));
        if let Some(caption) = caption {
            request = request.caption(caption.to_string());
        }
        request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
