//! Mock implementation of [`dbot_core::Bot`] for handler tests.
//!
//! Records every outgoing text and photo. For photos it also captures whether the file existed
//! at send time and its bytes, so tests can check the image after the handler deleted it.

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum Sent {
    Text {
        chat_id: i64,
        text: String,
    },
    Photo {
        chat_id: i64,
        path: PathBuf,
        caption: Option<String>,
        bytes: Option<Vec<u8>>,
    },
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail_photos: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bot whose `send_photo` always fails (text still succeeds).
    pub fn failing_photos() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_photos: true,
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, path: &Path, caption: Option<&str>) -> Result<()> {
        if self.fail_photos {
            return Err(DbotError::Bot("upload rejected".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Photo {
            chat_id: chat.id,
            path: path.to_path_buf(),
            caption: caption.map(str::to_string),
            bytes: std::fs::read(path).ok(),
        });
        Ok(())
    }
}
