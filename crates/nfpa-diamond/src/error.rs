use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::hazard::HazardField;

/// Which required asset was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Template,
    HelpImage,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Template => f.write_str("Template image"),
            AssetKind::HelpImage => f.write_str("Help image"),
        }
    }
}

/// User input rejected before anything is drawn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("{field} must be between 0 and 4.")]
    OutOfRange { field: HazardField, value: i64 },

    #[error("Unknown special hazard '{0}'. Use one of: ACID, ALK, COR, OX, RADIO, W.")]
    UnknownSpecial(String),
}

#[derive(Error, Debug)]
pub enum DiamondError {
    #[error("{kind} '{}' not found.", path.display())]
    MissingAsset { kind: AssetKind, path: PathBuf },

    #[error("Built-in font data is not a valid TrueType font")]
    BuiltinFont,

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DiamondError>;
