//! # nfpa-handlers
//!
//! Chat command surface for the diamond renderer: `/nfpa`, `/help` and `/start`.
//! Each handler answers through [`dbot_core::Bot`] and never fails the chain on user or render errors.

pub mod command;
mod help_handler;
mod nfpa_handler;

pub use command::{parse_command, BotCommand, CommandError, NfpaArgs, COMMANDS, USAGE};
pub use help_handler::{HelpHandler, HELP_CAPTION};
pub use nfpa_handler::{preview_caption, NfpaHandler, PREVIEW_FOOTER, PREVIEW_TITLE};
