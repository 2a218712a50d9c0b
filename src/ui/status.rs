use macroquad::prelude::*;

use crate::state::ApplicationState;

use super::layout::Layout;

/// Status line under the canvas: grid size, current color, hovered cell.
pub fn draw_status(state: &ApplicationState, layout: &Layout, hovered: Option<(usize, usize)>) {
    let mut text = format!(
        "{}x{} | {}",
        state.grid.width(),
        state.grid.height(),
        state.current_color.to_hex()
    );
    if let Some((col, row)) = hovered {
        text.push_str(&format!(" | ({}, {})", col, row));
    }
    draw_text(&text, layout.canvas.x, layout.status_y, 18.0, DARKGRAY);
}
