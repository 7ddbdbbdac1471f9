//! CLI parser.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nfpa-bot")]
#[command(about = "NFPA diamond Telegram bot: run, render", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Render one diamond to a file using the configured assets (no Telegram connection).
    #[command(allow_negative_numbers = true)]
    Render {
        health: i64,
        flammability: i64,
        reactivity: i64,
        /// Special hazard code (ACID, ALK, COR, OX, RADIO, W) or free text.
        #[arg(short, long, default_value = "")]
        special: String,
        #[arg(short, long, default_value = "nfpa_preview.png")]
        output: PathBuf,
    },
}
