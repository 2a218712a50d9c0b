pub mod color;
pub mod constants;
pub mod grid;

pub use color::*;
pub use constants::*;
pub use grid::*;
