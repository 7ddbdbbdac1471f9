//! Renderer config: asset locations, output directory, special-code policy. Loaded from env.

use anyhow::Result;
use nfpa_diamond::AssetPaths;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct NfpaConfig {
    /// NFPA_ASSETS_DIR; root for the default asset names
    pub assets_dir: PathBuf,
    /// NFPA_TEMPLATE_PATH
    pub template: PathBuf,
    /// NFPA_ICONS_DIR
    pub icons_dir: PathBuf,
    /// NFPA_FONT_PATH; empty or `builtin` selects the built-in font
    pub font: Option<PathBuf>,
    /// NFPA_HELP_IMAGE
    pub help_image: PathBuf,
    /// NFPA_OUTPUT_DIR; per-render files are created here
    pub output_dir: PathBuf,
    /// NFPA_STRICT_SPECIAL; reject unknown special codes instead of drawing them as text
    pub strict_special: bool,
}

impl NfpaConfig {
    pub fn from_env() -> Result<Self> {
        let assets_dir = env::var("NFPA_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let defaults = AssetPaths::under(&assets_dir);

        let path_or = |key: &str, default: PathBuf| {
            env::var(key).map(PathBuf::from).unwrap_or(default)
        };
        let font = match env::var("NFPA_FONT_PATH") {
            Ok(v) if v.trim().is_empty() || v.eq_ignore_ascii_case("builtin") => None,
            Ok(v) => Some(PathBuf::from(v)),
            Err(_) => defaults.font.clone(),
        };
        let strict_special = match env::var("NFPA_STRICT_SPECIAL") {
            Ok(v) => parse_bool(&v).ok_or_else(|| {
                anyhow::anyhow!("NFPA_STRICT_SPECIAL must be true or false, got: {}", v)
            })?,
            Err(_) => false,
        };

        Ok(Self {
            template: path_or("NFPA_TEMPLATE_PATH", defaults.template),
            icons_dir: path_or("NFPA_ICONS_DIR", defaults.icons_dir),
            font,
            help_image: path_or("NFPA_HELP_IMAGE", defaults.help_image),
            output_dir: path_or("NFPA_OUTPUT_DIR", env::temp_dir()),
            assets_dir,
            strict_special,
        })
    }

    pub fn asset_paths(&self) -> AssetPaths {
        AssetPaths::under(&self.assets_dir)
            .with_template(self.template.clone())
            .with_icons_dir(self.icons_dir.clone())
            .with_font(self.font.clone())
            .with_help_image(self.help_image.clone())
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
