use macroquad::prelude::*;

use super::layout::{Layout, BUTTON_HEIGHT, BUTTON_WIDTH, MARGIN};

pub fn draw_button(text: &str, x: f32, y: f32, width: f32, height: f32, is_active: bool) -> bool {
    let color = if is_active { DARKGRAY } else { GRAY };
    let rect = Rect::new(x, y, width, height);
    draw_rectangle(x, y, width, height, color);
    draw_rectangle_lines(x, y, width, height, 2.0, BLACK);
    let text_size = measure_text(text, None, 20, 1.0);
    let text_x = x + (width - text_size.width) / 2.0;
    let text_y = y + (height + text_size.height) / 2.0;
    draw_text(text, text_x, text_y, 20.0, BLACK);
    is_mouse_button_pressed(MouseButton::Left) && rect.contains(Vec2::from(mouse_position()))
}

/// What the toolbar asked for this frame.
pub struct ToolbarAction {
    pub clear: bool,
    pub export: bool,
}

pub fn render_toolbar(layout: &Layout) -> ToolbarAction {
    let origin = layout.toolbar_origin;
    let clear = draw_button(
        "Clear",
        origin.x,
        origin.y,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
        false,
    );
    let export = draw_button(
        "Save PNG",
        origin.x + BUTTON_WIDTH + MARGIN,
        origin.y,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
        false,
    );
    ToolbarAction { clear, export }
}
