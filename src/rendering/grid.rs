use macroquad::prelude::*;

use crate::core::constants::{GRIDLINE, GRIDLINE_THICKNESS};

/// Overlays the gridline lattice: one vertical line per column boundary,
/// one horizontal line per row boundary, drawn after the cell pass.
pub struct GridRenderer {
    origin: Vec2,
    cols: usize,
    rows: usize,
    pixel_size: f32,
}

impl GridRenderer {
    pub fn new(origin: Vec2, cols: usize, rows: usize, pixel_size: f32) -> Self {
        GridRenderer {
            origin,
            cols,
            rows,
            pixel_size,
        }
    }

    pub fn draw(&self) {
        let line_color = GRIDLINE.to_mq_color();
        let w = self.cols as f32 * self.pixel_size;
        let h = self.rows as f32 * self.pixel_size;

        // Vertical lines
        for col in 0..=self.cols {
            let x = self.origin.x + col as f32 * self.pixel_size;
            draw_line(
                x,
                self.origin.y,
                x,
                self.origin.y + h,
                GRIDLINE_THICKNESS,
                line_color,
            );
        }

        // Horizontal lines
        for row in 0..=self.rows {
            let y = self.origin.y + row as f32 * self.pixel_size;
            draw_line(
                self.origin.x,
                y,
                self.origin.x + w,
                y,
                GRIDLINE_THICKNESS,
                line_color,
            );
        }
    }
}
