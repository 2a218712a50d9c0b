use macroquad::prelude::vec2;

use tiny_pixel_pad::app::export::save_png;
use tiny_pixel_pad::core::color::Rgba;
use tiny_pixel_pad::core::constants::BACKGROUND;
use tiny_pixel_pad::input::{clear_canvas, handle_pointer, PointerEvent, PointerPhase};
use tiny_pixel_pad::rendering::rasterize;
use tiny_pixel_pad::state::ApplicationState;

const PIXEL_SIZE: f32 = 14.0;

fn event(phase: PointerPhase, x: f32, y: f32) -> PointerEvent {
    PointerEvent {
        phase,
        pos: vec2(x, y),
    }
}

#[test]
fn paint_drag_clear_scenario() {
    let mut state = ApplicationState::new(24, 24);
    let red = Rgba::from_hex("#ff0000").unwrap();
    state.current_color = red;

    // press at surface pixel (0,0)
    handle_pointer(&mut state, event(PointerPhase::Started, 0.0, 0.0), PIXEL_SIZE);
    assert_eq!(state.grid.get(0, 0), red);

    // drag to surface pixel (28,0): cell (2,0) paints, cell (1,0) was
    // never visited and stays background
    handle_pointer(&mut state, event(PointerPhase::Moved, 28.0, 0.0), PIXEL_SIZE);
    assert_eq!(state.grid.get(2, 0), red);
    assert_eq!(state.grid.get(1, 0), BACKGROUND);

    // release
    handle_pointer(&mut state, event(PointerPhase::Ended, 28.0, 0.0), PIXEL_SIZE);
    assert!(!state.drawing);

    // clear resets all 576 cells
    clear_canvas(&mut state);
    assert_eq!(
        state
            .grid
            .iter()
            .filter(|&(_, color)| color == BACKGROUND)
            .count(),
        576
    );
}

#[test]
fn rendered_surface_matches_grid_and_is_stable() {
    let mut state = ApplicationState::new(24, 24);
    let red = Rgba::from_hex("#ff0000").unwrap();
    state.current_color = red;
    handle_pointer(&mut state, event(PointerPhase::Started, 0.0, 0.0), PIXEL_SIZE);
    handle_pointer(&mut state, event(PointerPhase::Moved, 28.0, 0.0), PIXEL_SIZE);

    let raster = rasterize(&state.grid, 14);
    assert_eq!((raster.width, raster.height), (336, 336));

    // interior of painted cells
    assert_eq!(pixel(&raster, 7, 7), red);
    assert_eq!(pixel(&raster, 2 * 14 + 7, 7), red);
    // the skipped cell renders background
    assert_eq!(pixel(&raster, 14 + 7, 7), BACKGROUND);

    // redraw with no intervening mutation is byte-identical
    let again = rasterize(&state.grid, 14);
    assert_eq!(raster.pixels, again.pixels);
}

#[test]
fn export_writes_decodable_png() {
    let mut state = ApplicationState::new(24, 24);
    let red = Rgba::from_hex("#ff0000").unwrap();
    state.current_color = red;
    handle_pointer(&mut state, event(PointerPhase::Started, 0.0, 0.0), PIXEL_SIZE);

    let path = std::env::temp_dir().join("tiny-pixel-pad-export-test.png");
    let path = path.to_str().expect("temp path is valid utf-8");
    save_png(&state.grid, 14, path).expect("export succeeds");

    let decoded = image::open(path).expect("exported file decodes").to_rgba8();
    assert_eq!(decoded.dimensions(), (336, 336));
    assert_eq!(decoded.get_pixel(7, 7).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(21, 21).0, [255, 255, 255, 255]);

    std::fs::remove_file(path).ok();
}

fn pixel(raster: &tiny_pixel_pad::rendering::Raster, x: u32, y: u32) -> Rgba {
    let i = ((y * raster.width + x) * 4) as usize;
    Rgba {
        r: raster.pixels[i],
        g: raster.pixels[i + 1],
        b: raster.pixels[i + 2],
        a: raster.pixels[i + 3],
    }
}
