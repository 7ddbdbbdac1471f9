//! `/nfpa` handler: validates the ratings, renders the diamond off the async runtime and sends it as a photo.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use nfpa_diamond::{DiamondRenderer, InvalidInput, Placard};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::command::{parse_command, BotCommand, NfpaArgs};

pub const PREVIEW_TITLE: &str = "NFPA Diamond Preview";
pub const PREVIEW_FOOTER: &str = "Open the image and press 'Save' to download it.";

/// Caption sent with the rendered diamond.
pub fn preview_caption(placard: &Placard) -> String {
    format!(
        "{}\nHealth: {}\nFlammability: {}\nReactivity: {}\nSpecial Hazard: {}\n\n{}",
        PREVIEW_TITLE,
        placard.health,
        placard.flammability,
        placard.reactivity,
        placard.special,
        PREVIEW_FOOTER
    )
}

#[derive(Clone)]
pub struct NfpaHandler {
    renderer: Arc<DiamondRenderer>,
    bot: Arc<dyn CoreBot>,
    bot_username: Arc<RwLock<Option<String>>>,
    strict_special: bool,
}

impl NfpaHandler {
    pub fn new(
        renderer: Arc<DiamondRenderer>,
        bot: Arc<dyn CoreBot>,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            renderer,
            bot,
            bot_username,
            strict_special: false,
        }
    }

    /// Reject special codes outside the known set instead of drawing them as text.
    pub fn with_strict_special(mut self, strict: bool) -> Self {
        self.strict_special = strict;
        self
    }

    /// Ratings are validated before the special code.
    fn build_placard(&self, args: &NfpaArgs) -> std::result::Result<Placard, InvalidInput> {
        let (h, f, r) = (args.health, args.flammability, args.reactivity);
        if self.strict_special {
            Placard::from_raw_strict(h, f, r, &args.special)
        } else {
            Placard::from_raw(h, f, r, &args.special)
        }
    }

    async fn handle_nfpa(&self, message: &Message, args: &NfpaArgs) -> Result<HandlerResponse> {
        let placard = match self.build_placard(args) {
            Ok(placard) => placard,
            Err(e) => {
                info!(user_id = message.user.id, reason = %e, "Rejected /nfpa input");
                return self.send_text_and_stop(message, &e.to_string()).await;
            }
        };

        let renderer = self.renderer.clone();
        let to_render = placard.clone();
        let rendered = match tokio::task::spawn_blocking(move || renderer.render(&to_render)).await {
            Ok(Ok(rendered)) => rendered,
            Ok(Err(e)) => {
                error!(error = %e, user_id = message.user.id, "Diamond render failed");
                return self.send_text_and_stop(message, &format!("Error: {}", e)).await;
            }
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Render task panicked");
                return self.send_text_and_stop(message, "Error: rendering failed").await;
            }
        };

        let caption = preview_caption(&placard);
        if let Err(e) = self
            .bot
            .send_photo(&message.chat, rendered.path(), Some(&caption))
            .await
        {
            error!(error = %e, chat_id = message.chat.id, "Failed to send diamond");
            return self.send_text_and_stop(message, &format!("Error: {}", e)).await;
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            special = %placard.special,
            "Diamond sent"
        );
        // dropping the handle deletes the file
        drop(rendered);
        Ok(HandlerResponse::Stop)
    }

    async fn send_text_and_stop(&self, message: &Message, text: &str) -> Result<HandlerResponse> {
        if let Err(e) = self.bot.reply_to(message, text).await {
            warn!(error = %e, chat_id = message.chat.id, "Failed to send reply");
        }
        Ok(HandlerResponse::Stop)
    }
}

#[async_trait]
impl Handler for NfpaHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();
        match parse_command(&message.content, username.as_deref()) {
            Some(Ok(BotCommand::Nfpa(args))) => self.handle_nfpa(message, &args).await,
            Some(Err(usage)) => self.send_text_and_stop(message, &usage.to_string()).await,
            _ => Ok(HandlerResponse::Continue),
        }
    }
}
