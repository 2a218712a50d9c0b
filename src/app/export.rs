use anyhow::{Context, Result};
use image::RgbaImage;

use crate::core::grid::PixelGrid;
use crate::rendering::raster;

/// Render the grid and write it as a PNG. The image is exactly what the
/// on-screen redraw shows: cells at pixel-size scale plus the gridline
/// lattice.
pub fn save_png(grid: &PixelGrid, pixel_size: u32, path: &str) -> Result<()> {
    let raster = raster::rasterize(grid, pixel_size);
    let image = RgbaImage::from_raw(raster.width, raster.height, raster.pixels)
        .context("raster buffer does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {path}"))?;
    Ok(())
}
