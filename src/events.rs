use crate::constants::PARALLAX_RANGE_PX;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Map pointer movement over the interior section to the moon's parallax
/// target: viewport-relative position, centered, scaled to the full swing.
/// Leaving the section recenters; under reduced motion the handler is inert.
pub fn wire_parallax(
    document: &web::Document,
    window: &web::Window,
    section_id: &str,
    target: Rc<Cell<(f32, f32)>>,
    reduced: Rc<Cell<bool>>,
) -> anyhow::Result<()> {
    let section = crate::dom::require_element(document, section_id)?;

    {
        let win = window.clone();
        let target = target.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if reduced.get() {
                return;
            }
            let vw = win
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(1.0)
                .max(1.0);
            let vh = win
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(1.0)
                .max(1.0);
            let ox = (ev.client_x() as f64 / vw - 0.5) * PARALLAX_RANGE_PX;
            let oy = (ev.client_y() as f64 / vh - 0.5) * PARALLAX_RANGE_PX;
            target.set((ox as f32, oy as f32));
        }) as Box<dyn FnMut(_)>);
        _ = section.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            target.set((0.0, 0.0));
        }) as Box<dyn FnMut(_)>);
        _ = section.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    Ok(())
}

/// Track the pointer in canvas uv space (origin bottom-left) for the wave
/// field highlight. Listens on the window so the glow eases away instead of
/// freezing at the canvas edge.
pub fn wire_field_pointer(canvas: &web::HtmlCanvasElement, pointer_uv: Rc<Cell<(f32, f32)>>) {
    let canvas_m = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = canvas_m.get_bounding_client_rect();
        let w = rect.width().max(1.0);
        let h = rect.height().max(1.0);
        let u = ((ev.client_x() as f64 - rect.left()) / w).clamp(0.0, 1.0);
        let v = ((ev.client_y() as f64 - rect.top()) / h).clamp(0.0, 1.0);
        pointer_uv.set((u as f32, (1.0 - v) as f32));
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
