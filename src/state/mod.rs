//! Application State Module
//!
//! Holds the global state for the editor: the pixel grid itself, the
//! currently selected palette color, and the transient drawing-active
//! flag that gates whether pointer moves paint cells.

use crate::core::color::{Rgba, PALETTE};
use crate::core::grid::PixelGrid;

/// The main application state containing all global state
pub struct ApplicationState {
    /// The fixed-size grid of painted cells
    pub grid: PixelGrid,
    /// The currently selected color for painting
    pub current_color: Rgba,
    /// True strictly between interaction start and interaction end
    pub drawing: bool,
}

impl ApplicationState {
    /// Creates a new ApplicationState with an all-background grid
    pub fn new(width: usize, height: usize) -> Self {
        ApplicationState {
            grid: PixelGrid::new(width, height),
            current_color: PALETTE[0],
            drawing: false,
        }
    }
}
