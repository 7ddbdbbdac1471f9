//! BotConfig: TelegramConfig (token, API URL, log file) + NfpaConfig (assets, output). Use load() for env-based loading.

use anyhow::Result;
use dbot_telegram::TelegramConfig;

use super::NfpaConfig;

pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub nfpa: NfpaConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let nfpa = NfpaConfig::from_env()?;
        Ok(Self { telegram, nfpa })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }

    pub fn log_file(&self) -> &str {
        &self.telegram.log_file
    }
}
