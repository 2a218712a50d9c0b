pub mod canvas;
pub mod cursor;
pub mod grid;
pub mod raster;

pub use canvas::CanvasRenderer;
pub use cursor::draw_cell_highlight;
pub use grid::GridRenderer;
pub use raster::{rasterize, Raster};
