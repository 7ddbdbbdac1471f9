//! Diamond geometry. Positions are fractions of the canvas so any template size works; on the
//! native 2048 px canvas they land on (512,1024), (1024,512), (1536,1024) and (1024,1536).

/// Canvas size the glyph size is specified against.
pub const NATIVE_CANVAS: u32 = 2048;
/// Glyph height on the native canvas.
pub const NATIVE_GLYPH_PX: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// Health (blue).
    Left,
    /// Flammability (red).
    Top,
    /// Reactivity (yellow).
    Right,
    /// Special hazard (white).
    Bottom,
}

impl Quadrant {
    /// Center of the quadrant in pixel coordinates.
    pub fn anchor(self, width: u32, height: u32) -> (i32, i32) {
        let (w, h) = (width as i64, height as i64);
        let (x, y) = match self {
            Quadrant::Left => (w / 4, h / 2),
            Quadrant::Top => (w / 2, h / 4),
            Quadrant::Right => (w * 3 / 4, h / 2),
            Quadrant::Bottom => (w / 2, h * 3 / 4),
        };
        (x as i32, y as i32)
    }
}

/// Glyph height in pixels for a canvas of the given height.
pub fn glyph_px(canvas_height: u32) -> f32 {
    (canvas_height as f32 * NATIVE_GLYPH_PX as f32 / NATIVE_CANVAS as f32).max(1.0)
}

/// Icon size on a canvas of the given height; icons are drawn for the native canvas.
pub fn icon_size((width, height): (u32, u32), canvas_height: u32) -> (u32, u32) {
    let scale = |v: u32| ((v as u64 * canvas_height as u64 / NATIVE_CANVAS as u64) as u32).max(1);
    (scale(width), scale(height))
}
