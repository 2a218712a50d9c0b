pub mod dispatcher;
pub mod pointer;

pub use dispatcher::{clear_canvas, handle_pointer};
pub use pointer::{PointerEvent, PointerPhase, PointerSource};
