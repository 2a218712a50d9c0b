use macroquad::prelude::*;

/// Highlight the cell the pointer is hovering so the user can see what
/// the next press will paint.
pub fn draw_cell_highlight(origin: Vec2, cell: (usize, usize), pixel_size: f32) {
    let x = origin.x + cell.0 as f32 * pixel_size;
    let y = origin.y + cell.1 as f32 * pixel_size;
    draw_rectangle_lines(x, y, pixel_size, pixel_size, 2.0, Color::from_rgba(0, 0, 0, 150));
}
