use crate::state::ApplicationState;

use super::pointer::{PointerEvent, PointerPhase};

/// Apply one pointer event to the editor state.
///
/// Start sets drawing-active and paints the cell under the pointer; moves
/// paint only while drawing-active; end drops the flag. Positions that do
/// not map to a cell are no-ops, never errors.
pub fn handle_pointer(state: &mut ApplicationState, event: PointerEvent, pixel_size: f32) {
    match event.phase {
        PointerPhase::Started => {
            state.drawing = true;
            paint_at(state, event, pixel_size);
        }
        PointerPhase::Moved => {
            if state.drawing {
                paint_at(state, event, pixel_size);
            }
        }
        PointerPhase::Ended => {
            state.drawing = false;
        }
    }
}

fn paint_at(state: &mut ApplicationState, event: PointerEvent, pixel_size: f32) {
    if let Some((col, row)) = state.grid.cell_at(event.pos, pixel_size) {
        state.grid.set(col, row, state.current_color);
    }
}

/// Reset every cell to the background color. The current color and the
/// drawing-active flag are left untouched.
pub fn clear_canvas(state: &mut ApplicationState) {
    state.grid.clear();
}
