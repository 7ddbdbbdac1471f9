//! REPL runner: registers the command list, then converts each teloxide message to core::Message
//! and passes it to the HandlerChain in its own task. Returns after Ctrl-C stops the REPL.

use anyhow::Result;
use dbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Starts the REPL.
///
/// Before polling: `get_me()` fills `bot_username` (used to filter `/cmd@otherbot`) and
/// `commands` (name, description) are registered with `set_my_commands`. Both are best-effort.
#[instrument(skip(bot, handler_chain, bot_username, commands))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    commands: &[(&str, &str)],
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; commands addressed with @username are not filtered"),
    }

    let bot_commands: Vec<BotCommand> = commands
        .iter()
        .map(|(name, description)| BotCommand::new(*name, *description))
        .collect();
    if let Err(e) = bot.set_my_commands(bot_commands).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            if core_msg.content.is_empty() {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received message without text, skipped"
                );
                return Ok(());
            }
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %core_msg.content,
                "Received message"
            );

            // Each message runs in its own task so a slow render does not block the REPL
            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    info!("REPL stopped");
    Ok(())
}
