//! The diamond renderer: template in, composited PNG out.
//!
//! Every call reads the template (and an icon, if one applies) and writes its own uniquely named
//! output file, so concurrent renders never share a path.

use std::path::{Path, PathBuf};

use image::imageops::{overlay, resize, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

use crate::assets::AssetPaths;
use crate::error::{AssetKind, DiamondError, Result};
use crate::font::DiamondFont;
use crate::hazard::{Placard, SpecialHazard, SpecialMarking};
use crate::layout::{glyph_px, icon_size, Quadrant};

const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const OUTPUT_PREFIX: &str = "nfpa-";
const OUTPUT_SUFFIX: &str = ".png";

/// Output of one render. The file is deleted when the handle is dropped.
#[derive(Debug)]
pub struct RenderedDiamond {
    file: NamedTempFile,
}

impl RenderedDiamond {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[derive(Debug, Clone)]
pub struct DiamondRenderer {
    assets: AssetPaths,
    output_dir: PathBuf,
}

impl DiamondRenderer {
    /// `output_dir` receives one `nfpa-*.png` per [`DiamondRenderer::render`] call.
    pub fn new(assets: AssetPaths, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets,
            output_dir: output_dir.into(),
        }
    }

    pub fn assets(&self) -> &AssetPaths {
        &self.assets
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Composites the placard in memory.
    #[instrument(skip(self), fields(special = %placard.special))]
    pub fn render_image(&self, placard: &Placard) -> Result<RgbaImage> {
        let mut canvas = self.load_template()?;
        let (width, height) = canvas.dimensions();
        let font = DiamondFont::load(self.assets.font.as_deref())?;
        let px = glyph_px(height);

        let ratings = [
            (Quadrant::Left, placard.health),
            (Quadrant::Top, placard.flammability),
            (Quadrant::Right, placard.reactivity),
        ];
        for (quadrant, rating) in ratings {
            font.draw_centered(
                &mut canvas,
                &rating.to_string(),
                quadrant.anchor(width, height),
                px,
                TEXT_COLOR,
            );
        }

        let special_anchor = Quadrant::Bottom.anchor(width, height);
        let composited = match placard.special {
            SpecialMarking::Hazard(hazard) => self.composite_icon(&mut canvas, hazard, special_anchor),
            _ => false,
        };
        if !composited {
            if let Some(text) = placard.special.text() {
                font.draw_centered(&mut canvas, text, special_anchor, px, TEXT_COLOR);
            }
        }

        Ok(canvas)
    }

    /// Renders into a new uniquely named PNG inside the output directory.
    pub fn render(&self, placard: &Placard) -> Result<RenderedDiamond> {
        let canvas = self.render_image(placard)?;
        let file = tempfile::Builder::new()
            .prefix(OUTPUT_PREFIX)
            .suffix(OUTPUT_SUFFIX)
            .tempfile_in(&self.output_dir)?;
        canvas.save_with_format(file.path(), ImageFormat::Png)?;

        info!(
            path = %file.path().display(),
            health = %placard.health,
            flammability = %placard.flammability,
            reactivity = %placard.reactivity,
            special = %placard.special,
            "Diamond rendered"
        );
        Ok(RenderedDiamond { file })
    }

    /// Renders to a caller-chosen path, overwriting it.
    pub fn render_to(&self, placard: &Placard, target: impl AsRef<Path>) -> Result<()> {
        let canvas = self.render_image(placard)?;
        canvas.save_with_format(target.as_ref(), ImageFormat::Png)?;
        Ok(())
    }

    fn load_template(&self) -> Result<RgbaImage> {
        let path = &self.assets.template;
        if !path.is_file() {
            return Err(DiamondError::MissingAsset {
                kind: AssetKind::Template,
                path: path.clone(),
            });
        }
        Ok(image::open(path)?.to_rgba8())
    }

    /// Alpha-composites the hazard's icon, scaled to the canvas, centered on `anchor`. Returns
    /// false when the icon is missing or unreadable so the caller can draw the code instead.
    fn composite_icon(&self, canvas: &mut RgbaImage, hazard: SpecialHazard, (ax, ay): (i32, i32)) -> bool {
        let path = self.assets.icon_path(hazard);
        if !path.is_file() {
            debug!(path = %path.display(), code = hazard.code(), "Icon missing, drawing code text");
            return false;
        }
        let mut icon = match image::open(&path) {
            Ok(icon) => icon.to_rgba8(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Icon unreadable, drawing code text");
                return false;
            }
        };
        let (w, h) = icon_size(icon.dimensions(), canvas.height());
        if (w, h) != icon.dimensions() {
            icon = resize(&icon, w, h, FilterType::Triangle);
        }
        let x = ax as i64 - icon.width() as i64 / 2;
        let y = ay as i64 - icon.height() as i64 / 2;
        overlay(canvas, &icon, x, y);
        true
    }
}
