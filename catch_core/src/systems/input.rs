use crate::fsm::{HookMode, Trigger};
use crate::host::HookBody;
use crate::Config;

use super::fire;

/// Pointer (mouse or touch) events delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move { x: f32, y: f32 },
    Down,
    Up,
}

/// Apply a pointer event to the hook immediately
pub fn apply_pointer(
    mode: &mut HookMode,
    body: &mut dyn HookBody,
    event: PointerEvent,
    config: &Config,
) {
    match event {
        PointerEvent::Move { x, .. } => {
            if mode.is_dragging() {
                body.set_x(x);
            }
        }
        PointerEvent::Down => {
            fire(mode, body, Trigger::PointerDown, config);
        }
        PointerEvent::Up => {
            fire(mode, body, Trigger::PointerUp, config);
        }
    }
}
