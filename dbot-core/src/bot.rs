//! Bot abstraction for sending text and images.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it with teloxide, tests substitute recording mocks.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;
use std::path::Path;

/// Abstraction for outgoing messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Uploads the image file at `path` to the chat with an optional caption.
    /// The file must stay on disk until the returned future completes.
    async fn send_photo(&self, chat: &Chat, path: &Path, caption: Option<&str>) -> Result<()>;
}
