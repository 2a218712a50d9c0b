use macroquad::prelude::*;

use crate::core::grid::PixelGrid;

/// Draws the grid cells to screen. Every cell is repainted every frame;
/// the grid is small enough that a full pass beats tracking dirty cells.
pub struct CanvasRenderer {
    origin: Vec2,
    pixel_size: f32,
}

impl CanvasRenderer {
    pub fn new(origin: Vec2, pixel_size: f32) -> Self {
        CanvasRenderer { origin, pixel_size }
    }

    pub fn draw(&self, grid: &PixelGrid) {
        for ((col, row), color) in grid.iter() {
            draw_rectangle(
                self.origin.x + col as f32 * self.pixel_size,
                self.origin.y + row as f32 * self.pixel_size,
                self.pixel_size,
                self.pixel_size,
                color.to_mq_color(),
            );
        }
    }
}
