//! # NFPA diamond bot
//!
//! Wires dbot-core, handler-chain and dbot-telegram with the diamond renderer and command handlers.
//! Loads config from env and runs the REPL; also offers an offline `render` command.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::{BotConfig, NfpaConfig};
pub use runner::{build_handler_chain, build_renderer, placard_from_args, render_once, run_bot};
