use anyhow::{Context, Result};
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use nfpa_diamond::{DiamondFont, DiamondRenderer, Placard};
use nfpa_handlers::{HelpHandler, NfpaHandler, COMMANDS};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::config::{BotConfig, NfpaConfig};

/// Renderer over the configured assets; creates the output directory.
pub fn build_renderer(config: &NfpaConfig) -> Result<DiamondRenderer> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Create output directory {}", config.output_dir.display())
    })?;
    Ok(DiamondRenderer::new(config.asset_paths(), config.output_dir.clone()))
}

/// `/nfpa` first, then `/help` (which also answers `/start` and unknown commands).
pub fn build_handler_chain(
    config: &NfpaConfig,
    renderer: Arc<DiamondRenderer>,
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    let help_image = renderer.assets().help_image.clone();
    let nfpa = NfpaHandler::new(renderer, bot.clone(), bot_username.clone())
        .with_strict_special(config.strict_special);
    let help = HelpHandler::new(help_image, bot, bot_username);
    HandlerChain::new()
        .add_handler(Arc::new(nfpa))
        .add_handler(Arc::new(help))
}

/// Warns about missing assets at startup; they are only errors when a command needs them.
fn check_assets(renderer: &DiamondRenderer) {
    let assets = renderer.assets();
    let report = |what: &str, path: &Path| {
        if !path.exists() {
            warn!(path = %path.display(), "{} not found", what);
        }
    };
    report("Template image", &assets.template);
    report("Help image", &assets.help_image);
    report("Icon directory", &assets.icons_dir);
    match DiamondFont::load(assets.font.as_deref()) {
        Ok(font) if font.is_builtin() => info!("Using built-in font"),
        Ok(_) => info!("Using configured font"),
        Err(e) => warn!(error = %e, "No usable font"),
    }
}

/// Main entry: init logging, validate config, build handlers, then run the REPL until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    let renderer = Arc::new(build_renderer(&config.nfpa)?);
    info!(
        template = %renderer.assets().template.display(),
        output_dir = %renderer.output_dir().display(),
        strict_special = config.nfpa.strict_special,
        "Initializing bot"
    );
    check_assets(&renderer);

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let bot_username = Arc::new(RwLock::new(None));
    let handler_chain = build_handler_chain(&config.nfpa, renderer, bot, bot_username.clone());

    info!("Bot started successfully");
    run_repl(teloxide_bot, handler_chain, bot_username, COMMANDS).await?;
    info!("Bot stopped");
    Ok(())
}

/// Offline render for the `render` subcommand.
pub fn render_once(config: &NfpaConfig, placard: &Placard, output: &Path) -> Result<()> {
    let renderer = DiamondRenderer::new(config.asset_paths(), config.output_dir.clone());
    renderer.render_to(placard, output)?;
    Ok(())
}

/// Builds the placard for the `render` subcommand using the configured special-code policy.
pub fn placard_from_args(
    config: &NfpaConfig,
    health: i64,
    flammability: i64,
    reactivity: i64,
    special: &str,
) -> Result<Placard> {
    let placard = if config.strict_special {
        Placard::from_raw_strict(health, flammability, reactivity, special)?
    } else {
        Placard::from_raw(health, flammability, reactivity, special)?
    };
    Ok(placard)
}
