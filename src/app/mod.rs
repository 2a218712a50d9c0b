pub mod config;
pub mod export;

use log::{info, warn};
use macroquad::prelude::*;

use crate::core::constants::EXPORT_FILENAME;
use crate::input::{self, PointerSource};
use crate::rendering::{draw_cell_highlight, CanvasRenderer, GridRenderer};
use crate::state::ApplicationState;
use crate::ui::{self, Layout};

pub async fn run(config: &config::Config) {
    let cols = config.width as usize;
    let rows = config.height as usize;
    let pixel_size = config.pixel_size as f32;

    let layout = Layout::new(cols, rows, pixel_size);
    let mut state = ApplicationState::new(cols, rows);
    let mut pointer = PointerSource::new();
    let canvas_renderer = CanvasRenderer::new(layout.canvas.point(), pixel_size);
    let grid_renderer = GridRenderer::new(layout.canvas.point(), cols, rows, pixel_size);

    info!(
        "{}x{} grid at {} px per cell",
        cols, rows, config.pixel_size
    );

    loop {
        clear_background(WHITE);

        if let Some(event) = pointer.poll(layout.canvas) {
            input::handle_pointer(&mut state, event, pixel_size);
        }

        let action = ui::render_toolbar(&layout);
        if action.clear {
            input::clear_canvas(&mut state);
        }
        if action.export {
            match export::save_png(&state.grid, config.pixel_size, EXPORT_FILENAME) {
                Ok(()) => info!("saved {EXPORT_FILENAME}"),
                Err(err) => warn!("export failed: {err:#}"),
            }
        }
        ui::render_palette(&mut state, &layout);

        canvas_renderer.draw(&state.grid);
        grid_renderer.draw();
        draw_rectangle_lines(
            layout.canvas.x - 1.0,
            layout.canvas.y - 1.0,
            layout.canvas.w + 2.0,
            layout.canvas.h + 2.0,
            2.0,
            DARKGRAY,
        );

        let local = Vec2::from(mouse_position()) - layout.canvas.point();
        let hovered = state.grid.cell_at(local, pixel_size);
        if let Some(cell) = hovered {
            draw_cell_highlight(layout.canvas.point(), cell, pixel_size);
        }
        ui::draw_status(&state, &layout, hovered);

        next_frame().await
    }
}
