//! `/help` sends the static labeling guide image; `/start` and unknown commands get a short text.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use nfpa_diamond::{AssetKind, DiamondError};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::command::{parse_command, BotCommand, USAGE};

pub const HELP_CAPTION: &str = "NFPA Sign Labeling Guide\n\
This image explains how to label NFPA signs correctly.\n\n\
For more info, visit the official NFPA documentation.";

#[derive(Clone)]
pub struct HelpHandler {
    help_image: PathBuf,
    bot: Arc<dyn CoreBot>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl HelpHandler {
    pub fn new(
        help_image: impl Into<PathBuf>,
        bot: Arc<dyn CoreBot>,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            help_image: help_image.into(),
            bot,
            bot_username,
        }
    }

    async fn send_help(&self, message: &Message) -> Result<HandlerResponse> {
        if !self.help_image.is_file() {
            let err = DiamondError::MissingAsset {
                kind: AssetKind::HelpImage,
                path: self.help_image.clone(),
            };
            error!(error = %err, "Help image missing");
            self.reply(message, &format!("Error: {}", err)).await;
            return Ok(HandlerResponse::Stop);
        }

        if let Err(e) = self
            .bot
            .send_photo(&message.chat, &self.help_image, Some(HELP_CAPTION))
            .await
        {
            error!(error = %e, chat_id = message.chat.id, "Failed to send help image");
            self.reply(message, &format!("Error: {}", e)).await;
            return Ok(HandlerResponse::Stop);
        }
        info!(chat_id = message.chat.id, "Help image sent");
        Ok(HandlerResponse::Stop)
    }

    async fn reply(&self, message: &Message, text: &str) {
        if let Err(e) = self.bot.reply_to(message, text).await {
            warn!(error = %e, chat_id = message.chat.id, "Failed to send reply");
        }
    }
}

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();
        match parse_command(&message.content, username.as_deref()) {
            Some(Ok(BotCommand::Help)) => self.send_help(message).await,
            Some(Ok(BotCommand::Start)) => {
                self.reply(message, &format!("NFPA diamond bot.\n\n{}\n\n/help shows the labeling guide.", USAGE))
                    .await;
                Ok(HandlerResponse::Stop)
            }
            Some(Ok(BotCommand::Unknown(name))) => {
                info!(command = %name, "Unknown command");
                self.reply(message, &format!("Unknown command /{}. Try /help or /nfpa.", name))
                    .await;
                Ok(HandlerResponse::Stop)
            }
            _ => Ok(HandlerResponse::Continue),
        }
    }
}
