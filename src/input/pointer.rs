use macroquad::prelude::*;

/// Phase of a pointer interaction, shared by mouse and touch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerPhase {
    Started,
    Moved,
    Ended,
}

/// One pointer sample with canvas-local coordinates. Mouse and touch both
/// reduce to this; nothing downstream knows which source produced it.
#[derive(Copy, Clone, Debug)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub pos: Vec2,
}

/// Polls macroquad's mouse and touch state into canvas-scoped pointer
/// events. Only presses that land on the canvas rect start a stroke, and
/// leaving the rect mid-stroke ends it, the same way the canvas element's
/// own listeners scope interaction in a browser.
pub struct PointerSource {
    tracking: bool,
}

impl PointerSource {
    pub fn new() -> Self {
        PointerSource { tracking: false }
    }

    pub fn poll(&mut self, canvas: Rect) -> Option<PointerEvent> {
        // Touch takes precedence over the synthetic mouse position
        // macroquad reports for it. First active touch only.
        if let Some(touch) = touches().into_iter().next() {
            let began = matches!(touch.phase, TouchPhase::Started);
            let down = matches!(
                touch.phase,
                TouchPhase::Started | TouchPhase::Moved | TouchPhase::Stationary
            );
            return self.translate(down, began, touch.position, canvas);
        }

        let pos = Vec2::from(mouse_position());
        let began = is_mouse_button_pressed(MouseButton::Left);
        let down = began || is_mouse_button_down(MouseButton::Left);
        self.translate(down, began, pos, canvas)
    }

    fn translate(&mut self, down: bool, began: bool, pos: Vec2, canvas: Rect) -> Option<PointerEvent> {
        let local = pos - canvas.point();

        if began {
            if !canvas.contains(pos) {
                return None;
            }
            self.tracking = true;
            return Some(PointerEvent {
                phase: PointerPhase::Started,
                pos: local,
            });
        }

        if !self.tracking {
            return None;
        }

        // Release anywhere, or leaving the canvas, ends the stroke.
        if !down || !canvas.contains(pos) {
            self.tracking = false;
            return Some(PointerEvent {
                phase: PointerPhase::Ended,
                pos: local,
            });
        }

        Some(PointerEvent {
            phase: PointerPhase::Moved,
            pos: local,
        })
    }
}
