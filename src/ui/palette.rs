use macroquad::prelude::*;

use crate::core::color::{PALETTE, PALETTE_COLS};
use crate::state::ApplicationState;

use super::layout::{Layout, SWATCH_PADDING, SWATCH_SIZE};

/// Draw the swatch strip and handle selection clicks. Selecting a swatch
/// only changes the current color; the grid is untouched.
pub fn render_palette(state: &mut ApplicationState, layout: &Layout) {
    let mouse_pos = Vec2::from(mouse_position());

    for (i, color) in PALETTE.iter().enumerate() {
        let col = i % PALETTE_COLS;
        let row = i / PALETTE_COLS;
        let x = layout.palette_origin.x + col as f32 * (SWATCH_SIZE + SWATCH_PADDING);
        let y = layout.palette_origin.y + row as f32 * (SWATCH_SIZE + SWATCH_PADDING);

        draw_rectangle(x, y, SWATCH_SIZE, SWATCH_SIZE, color.to_mq_color());

        // Highlight if this is the current color
        let selected = state.current_color == *color;
        let border_width = if selected { 3.0 } else { 1.5 };
        let border_color = if selected {
            Color::from_rgba(70, 130, 255, 255)
        } else {
            BLACK
        };
        draw_rectangle_lines(x, y, SWATCH_SIZE, SWATCH_SIZE, border_width, border_color);

        let rect = Rect::new(x, y, SWATCH_SIZE, SWATCH_SIZE);
        if is_mouse_button_pressed(MouseButton::Left) && rect.contains(mouse_pos) {
            state.current_color = *color;
        }
    }
}
