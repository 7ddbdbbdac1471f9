//! Text drawing for the diamond. A configured TrueType font is preferred; when it is missing or
//! unreadable the embedded DejaVu Sans Bold is used instead.

use std::path::Path;

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use rusttype::{point, Font, Scale};
use tracing::{debug, warn};

use crate::error::{DiamondError, Result};

/// Embedded font data - DejaVu Sans Bold (license in assets/DejaVu-LICENSE)
const BUILTIN_FONT: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

pub struct DiamondFont {
    font: Font<'static>,
    builtin: bool,
}

impl DiamondFont {
    /// The embedded font.
    pub fn builtin() -> Result<Self> {
        let font = Font::try_from_bytes(BUILTIN_FONT).ok_or(DiamondError::BuiltinFont)?;
        Ok(Self {
            font,
            builtin: true,
        })
    }

    /// Loads the font at `path`, falling back to [`DiamondFont::builtin`] with a warning.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("No font configured, using built-in font");
            return Self::builtin();
        };
        match std::fs::read(path) {
            Ok(bytes) => match Font::try_from_vec(bytes) {
                Some(font) => Ok(Self {
                    font,
                    builtin: false,
                }),
                None => {
                    warn!(path = %path.display(), "Font file is not a valid TrueType font, using built-in font");
                    Self::builtin()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Font not available, using built-in font");
                Self::builtin()
            }
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    /// Draws `text` `px` pixels tall, centered horizontally and vertically on `anchor`.
    pub fn draw_centered(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        (ax, ay): (i32, i32),
        px: f32,
        color: Rgba<u8>,
    ) {
        let scale = Scale::uniform(px);
        let Some((x0, y0, x1, y1)) = ink_bounds(&self.font, scale, text) else {
            return;
        };
        let x = ax - (x0 + x1) / 2;
        let y = ay - (y0 + y1) / 2;
        draw_text_mut(canvas, color, x, y, scale, &self.font, text);
    }
}

/// Union of the glyph pixel boxes, laid out the way `draw_text_mut` lays them out.
fn ink_bounds(font: &Font<'_>, scale: Scale, text: &str) -> Option<(i32, i32, i32, i32)> {
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(0.0, ascent))
        .filter_map(|g| g.pixel_bounding_box())
        .fold(None, |acc, bb| {
            Some(match acc {
                None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
                Some((x0, y0, x1, y1)) => (
                    x0.min(bb.min.x),
                    y0.min(bb.min.y),
                    x1.max(bb.max.x),
                    y1.max(bb.max.y),
                ),
            })
        })
}
