//! Software rasterizer for the export path.
//!
//! Produces the same picture the on-screen renderer shows, but into a plain
//! RGBA8 buffer: every cell filled at pixel-size scale, then the gridline
//! lattice on top. Pure over the grid, so the redraw-idempotence and export
//! tests run headless.

use crate::core::color::Rgba;
use crate::core::constants::GRIDLINE;
use crate::core::grid::PixelGrid;

/// A rendered frame: row-major RGBA8, `width * height * 4` bytes.
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Render the full grid plus gridlines at `pixel_size` device pixels per
/// cell.
pub fn rasterize(grid: &PixelGrid, pixel_size: u32) -> Raster {
    let width = grid.width() as u32 * pixel_size;
    let height = grid.height() as u32 * pixel_size;
    let mut pixels = vec![0u8; (width * height * 4) as usize];

    for ((col, row), color) in grid.iter() {
        fill_rect(
            &mut pixels,
            width,
            col as u32 * pixel_size,
            row as u32 * pixel_size,
            pixel_size,
            pixel_size,
            color,
        );
    }

    // Gridline lattice, one device pixel wide. The closing boundary lines
    // land on the last pixel column/row so the border stays inside the
    // image.
    for col in 0..=grid.width() as u32 {
        let x = (col * pixel_size).min(width.saturating_sub(1));
        fill_rect(&mut pixels, width, x, 0, 1, height, GRIDLINE);
    }
    for row in 0..=grid.height() as u32 {
        let y = (row * pixel_size).min(height.saturating_sub(1));
        fill_rect(&mut pixels, width, 0, y, width, 1, GRIDLINE);
    }

    Raster {
        width,
        height,
        pixels,
    }
}

fn fill_rect(pixels: &mut [u8], stride: u32, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
    for py in y..y + h {
        for px in x..x + w {
            let i = ((py * stride + px) * 4) as usize;
            pixels[i] = color.r;
            pixels[i + 1] = color.g;
            pixels[i + 2] = color.b;
            pixels[i + 3] = color.a;
        }
    }
}
