//! Bot configuration: Telegram connectivity + renderer assets.

mod bot_config;
mod nfpa;


pub use bot_config::BotConfig;
pub use nfpa::NfpaConfig;
