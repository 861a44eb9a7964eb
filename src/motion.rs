use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The reduced-motion preference, read once at startup and tracked across
/// changes. Hosts without matchMedia default to motion allowed and never
/// notify.
pub struct MotionGate {
    reduced: Rc<Cell<bool>>,
    media: Option<web::MediaQueryList>,
}

impl MotionGate {
    pub fn read(window: &web::Window) -> Self {
        let media = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten();
        let reduced = Rc::new(Cell::new(
            media.as_ref().map(|m| m.matches()).unwrap_or(false),
        ));
        Self { reduced, media }
    }

    pub fn reduced(&self) -> bool {
        self.reduced.get()
    }

    /// Shared flag for callbacks that need the current value without holding
    /// the gate itself.
    pub fn flag(&self) -> Rc<Cell<bool>> {
        self.reduced.clone()
    }

    /// Subscribe to preference changes for the page lifetime. The flag is
    /// updated before `on_change` runs.
    pub fn subscribe(&self, mut on_change: impl FnMut(bool) + 'static) {
        let Some(media) = &self.media else {
            return;
        };
        let flag = self.reduced.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
            flag.set(ev.matches());
            on_change(ev.matches());
        }) as Box<dyn FnMut(_)>);
        _ = media.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
