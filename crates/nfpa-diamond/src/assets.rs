//! On-disk asset locations. All assets are read-only; only the template is required.

use std::path::{Path, PathBuf};

use crate::hazard::SpecialHazard;

pub const TEMPLATE_FILE: &str = "blank_diamond.png";
pub const ICONS_DIR: &str = "icons";
pub const FONT_FILE: &str = "arial.ttf";
pub const HELP_FILE: &str = "help.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    /// Blank diamond canvas.
    pub template: PathBuf,
    /// Directory holding one icon per [`SpecialHazard`].
    pub icons_dir: PathBuf,
    /// Preferred TrueType font; `None` or an unreadable file selects the embedded font.
    pub font: Option<PathBuf>,
    /// Static labeling guide served by `/help`.
    pub help_image: PathBuf,
}

impl AssetPaths {
    /// Standard layout under `root`: `blank_diamond.png`, `icons/`, `arial.ttf`, `help.png`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            template: root.join(TEMPLATE_FILE),
            icons_dir: root.join(ICONS_DIR),
            font: Some(root.join(FONT_FILE)),
            help_image: root.join(HELP_FILE),
        }
    }

    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_icons_dir(mut self, icons_dir: impl Into<PathBuf>) -> Self {
        self.icons_dir = icons_dir.into();
        self
    }

    pub fn with_font(mut self, font: Option<PathBuf>) -> Self {
        self.font = font;
        self
    }

    pub fn with_help_image(mut self, help_image: impl Into<PathBuf>) -> Self {
        self.help_image = help_image.into();
        self
    }

    /// Path of the icon for `hazard` (may not exist).
    pub fn icon_path(&self, hazard: SpecialHazard) -> PathBuf {
        self.icons_dir.join(hazard.icon_file())
    }
}
