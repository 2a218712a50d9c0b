use macroquad::prelude::*;

use tiny_pixel_pad::app::{self, config::CONFIG};
use tiny_pixel_pad::ui::Layout;

fn window_conf() -> Conf {
    let layout = Layout::new(
        CONFIG.width as usize,
        CONFIG.height as usize,
        CONFIG.pixel_size as f32,
    );
    Conf {
        window_title: String::from("tiny-pixel-pad"),
        window_width: layout.window_width.ceil() as i32,
        window_height: layout.window_height.ceil() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    app::run(&CONFIG).await;
}
