//! nfpa-bot binary: run the Telegram bot or render a single diamond. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use nfpa_bot::{placard_from_args, render_once, run_bot, BotConfig, Cli, Commands, NfpaConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Render {
            health,
            flammability,
            reactivity,
            special,
            output,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
                )
                .with_target(false)
                .init();

            let config = NfpaConfig::from_env()?;
            let placard = placard_from_args(&config, health, flammability, reactivity, &special)?;
            render_once(&config, &placard, &output)?;
            println!("Wrote {}", output.display());
            Ok(())
        }
    }
}
