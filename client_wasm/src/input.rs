//! Pointer input handling

use catch_core::PointerEvent;
use web_sys::HtmlCanvasElement;

/// Map client (CSS pixel) coordinates onto the canvas backing store
pub fn to_canvas_coords(canvas: &HtmlCanvasElement, client_x: f32, client_y: f32) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = (rect.width() as f32, rect.height() as f32);
    if w <= 0.0 || h <= 0.0 {
        return (client_x, client_y);
    }
    let sx = canvas.width() as f32 / w;
    let sy = canvas.height() as f32 / h;
    (
        (client_x - rect.left() as f32) * sx,
        (client_y - rect.top() as f32) * sy,
    )
}

/// Build a move event from client coordinates
pub fn pointer_move(canvas: &HtmlCanvasElement, client_x: f32, client_y: f32) -> PointerEvent {
    let (x, y) = to_canvas_coords(canvas, client_x, client_y);
    PointerEvent::Move { x, y }
}
