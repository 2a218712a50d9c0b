pub mod buttons;
pub mod layout;
pub mod palette;
pub mod status;

pub use buttons::{render_toolbar, ToolbarAction};
pub use layout::Layout;
pub use palette::render_palette;
pub use status::draw_status;
