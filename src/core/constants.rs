// Core constants for the pixel canvas
use crate::core::color::Rgba;

/// Color every cell starts with and returns to on clear.
pub const BACKGROUND: Rgba = Rgba::rgb(255, 255, 255);

/// Gridline lattice color.
pub const GRIDLINE: Rgba = Rgba::rgb(229, 229, 229);

pub const GRIDLINE_THICKNESS: f32 = 1.0;

/// Default filename for the exported PNG.
pub const EXPORT_FILENAME: &str = "pixel-art.png";
