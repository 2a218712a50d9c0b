use macroquad::prelude::*;

use crate::core::color::Rgba;
use crate::core::constants::BACKGROUND;

/// Fixed-size pixel grid. Cells are stored in a flat row-major buffer
/// (`row * width + col`); dimensions never change after creation.
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<Rgba>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize) -> Self {
        PixelGrid {
            width,
            height,
            cells: vec![BACKGROUND; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Map a surface-local position to cell coordinates.
    /// Returns None for positions outside the grid.
    pub fn cell_at(&self, local: Vec2, pixel_size: f32) -> Option<(usize, usize)> {
        let col = (local.x / pixel_size).floor();
        let row = (local.y / pixel_size).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return None;
        }
        Some((col, row))
    }

    pub fn get(&self, col: usize, row: usize) -> Rgba {
        self.cells[row * self.width + col]
    }

    pub fn set(&mut self, col: usize, row: usize, color: Rgba) {
        self.cells[row * self.width + col] = color;
    }

    /// Reset every cell to the background color.
    pub fn clear(&mut self) {
        self.cells.fill(BACKGROUND);
    }

    /// Iterate all cells as ((col, row), color), row by row.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Rgba)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &color)| ((i % self.width, i / self.width), color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::PALETTE;
    use macroquad::prelude::vec2;

    #[test]
    fn new_grid_is_all_background() {
        let grid = PixelGrid::new(4, 3);
        assert!(grid.iter().all(|(_, color)| color == BACKGROUND));
    }

    #[test]
    fn set_touches_exactly_one_cell() {
        let mut grid = PixelGrid::new(4, 3);
        grid.set(2, 1, PALETTE[2]);
        for ((col, row), color) in grid.iter() {
            if (col, row) == (2, 1) {
                assert_eq!(color, PALETTE[2]);
            } else {
                assert_eq!(color, BACKGROUND);
            }
        }
    }

    #[test]
    fn cell_at_maps_and_bounds_checks() {
        let grid = PixelGrid::new(24, 24);
        assert_eq!(grid.cell_at(vec2(0.0, 0.0), 14.0), Some((0, 0)));
        assert_eq!(grid.cell_at(vec2(28.0, 0.0), 14.0), Some((2, 0)));
        assert_eq!(grid.cell_at(vec2(13.9, 13.9), 14.0), Some((0, 0)));
        assert_eq!(grid.cell_at(vec2(-0.1, 5.0), 14.0), None);
        assert_eq!(grid.cell_at(vec2(5.0, -3.0), 14.0), None);
        assert_eq!(grid.cell_at(vec2(24.0 * 14.0, 0.0), 14.0), None);
        assert_eq!(grid.cell_at(vec2(0.0, 24.0 * 14.0), 14.0), None);
    }

    #[test]
    fn clear_resets_paint_history() {
        let mut grid = PixelGrid::new(5, 5);
        for row in 0..5 {
            for col in 0..5 {
                grid.set(col, row, PALETTE[4]);
            }
        }
        grid.clear();
        assert!(grid.iter().all(|(_, color)| color == BACKGROUND));
    }
}
