//! # nfpa-diamond
//!
//! Draws an NFPA 704 hazard diamond: three numeric ratings and an optional special-hazard
//! icon (or code text) composited onto a template canvas.
//!
//! - [`hazard`]: validated ratings, the closed set of special hazards, [`Placard`]
//! - [`assets`]: where the template, icons and font live on disk
//! - [`font`]: TrueType text, with an embedded DejaVu Sans Bold as the built-in fallback
//! - [`layout`]: quadrant anchors scaled to the canvas
//! - [`renderer`]: [`DiamondRenderer`] and the per-call [`RenderedDiamond`] output handle

pub mod assets;
pub mod error;
pub mod font;
pub mod hazard;
pub mod layout;
pub mod renderer;

pub use assets::AssetPaths;
pub use error::{AssetKind, DiamondError, InvalidInput, Result};
pub use font::DiamondFont;
pub use hazard::{HazardField, HazardRating, Placard, SpecialHazard, SpecialMarking};
pub use layout::Quadrant;
pub use renderer::{DiamondRenderer, RenderedDiamond};
