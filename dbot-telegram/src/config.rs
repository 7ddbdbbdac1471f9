//! Telegram connectivity config: token, optional API URL, log file path.
//! Loaded from env: BOT_TOKEN (required), TELEGRAM_API_URL or TELOXIDE_API_URL, LOG_FILE.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/nfpa-bot.log";

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: String,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN; a missing token is an error.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        if bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// telegram_api_url must be a valid URL if set.
    pub fn validate(&self) -> Result<()> {
        self.api_url().map(|_| ())
    }

    fn api_url(&self) -> Result<Option<reqwest::Url>> {
        match &self.telegram_api_url {
            Some(url_str) => reqwest::Url::parse(url_str).map(Some).map_err(|_| {
                anyhow::anyhow!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                )
            }),
            None => Ok(None),
        }
    }

    /// Creates the teloxide Bot, pointed at the custom API URL when one is configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(&self.bot_token);
        Ok(match self.api_url()? {
            Some(url) => bot.set_api_url(url),
            None => bot,
        })
    }
}
