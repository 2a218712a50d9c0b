use macroquad::prelude::*;

use crate::core::color::{PALETTE_COLS, PALETTE_ROWS};

pub const MARGIN: f32 = 10.0;
pub const BUTTON_WIDTH: f32 = 110.0;
pub const BUTTON_HEIGHT: f32 = 30.0;
pub const SWATCH_SIZE: f32 = 24.0;
pub const SWATCH_PADDING: f32 = 6.0;
pub const STATUS_HEIGHT: f32 = 24.0;

/// Fixed screen layout, top to bottom: toolbar, palette strip, canvas,
/// status line. Computed once from the grid configuration; the window is
/// not resizable.
pub struct Layout {
    pub toolbar_origin: Vec2,
    pub palette_origin: Vec2,
    pub canvas: Rect,
    pub status_y: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Layout {
    pub fn new(cols: usize, rows: usize, pixel_size: f32) -> Self {
        let canvas_width = cols as f32 * pixel_size;
        let canvas_height = rows as f32 * pixel_size;

        let toolbar_origin = vec2(MARGIN, MARGIN);
        let palette_origin = vec2(MARGIN, MARGIN + BUTTON_HEIGHT + MARGIN);
        let palette_height =
            PALETTE_ROWS as f32 * (SWATCH_SIZE + SWATCH_PADDING) - SWATCH_PADDING;
        let canvas_y = palette_origin.y + palette_height + MARGIN;
        let canvas = Rect::new(MARGIN, canvas_y, canvas_width, canvas_height);
        let status_y = canvas.y + canvas.h + MARGIN + STATUS_HEIGHT * 0.5;

        let toolbar_width = 2.0 * BUTTON_WIDTH + MARGIN;
        let palette_width =
            PALETTE_COLS as f32 * (SWATCH_SIZE + SWATCH_PADDING) - SWATCH_PADDING;
        let content_width = canvas_width.max(toolbar_width).max(palette_width);

        Layout {
            toolbar_origin,
            palette_origin,
            canvas,
            status_y,
            window_width: content_width + 2.0 * MARGIN,
            window_height: canvas.y + canvas.h + MARGIN + STATUS_HEIGHT + MARGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_rect_matches_configured_surface() {
        let layout = Layout::new(24, 24, 14.0);
        assert_eq!(layout.canvas.w, 336.0);
        assert_eq!(layout.canvas.h, 336.0);
        assert!(layout.window_width >= layout.canvas.w + 2.0 * MARGIN);
        assert!(layout.window_height > layout.canvas.y + layout.canvas.h);
    }
}
