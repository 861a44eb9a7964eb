use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type FieldSlot = Rc<RefCell<Option<render::GpuState>>>;

/// Lifecycle owner for the background wave field. The slot holds the single
/// live instance; the frame loop renders through it. Creation is async
/// (adapter/device handshake), so a pending flag stops duplicate spawns and
/// the preference is re-checked once the handshake lands.
#[derive(Clone)]
pub struct Field {
    slot: FieldSlot,
    canvas: web::HtmlCanvasElement,
    reduced: Rc<Cell<bool>>,
    pending: Rc<Cell<bool>>,
}

impl Field {
    pub fn new(canvas: web::HtmlCanvasElement, reduced: Rc<Cell<bool>>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
            canvas,
            reduced,
            pending: Rc::new(Cell::new(false)),
        }
    }

    pub fn slot(&self) -> FieldSlot {
        self.slot.clone()
    }

    /// Create or tear down to match the preference.
    pub fn apply_preference(&self, reduced: bool) {
        if reduced {
            self.teardown();
        } else {
            self.ensure();
        }
    }

    /// Start building an instance if none exists and none is in flight.
    fn ensure(&self) {
        if self.slot.borrow().is_some() || self.pending.get() {
            return;
        }
        self.pending.set(true);
        let slot = self.slot.clone();
        let canvas = self.canvas.clone();
        let reduced = self.reduced.clone();
        let pending = self.pending.clone();
        spawn_local(async move {
            let built = render::GpuState::new(&canvas).await;
            pending.set(false);
            match built {
                Ok(gpu) => {
                    if reduced.get() {
                        // preference flipped during the handshake
                        return;
                    }
                    *slot.borrow_mut() = Some(gpu);
                    show_canvas(&canvas, true);
                    log::info!("[field] wave field ready");
                }
                Err(e) => {
                    log::error!("[field] WebGPU init error: {:?}", e);
                }
            }
        });
    }

    /// Drop the current instance, if any. Safe to call repeatedly.
    pub fn teardown(&self) {
        if self.slot.borrow_mut().take().is_some() {
            log::info!("[field] wave field released");
        }
        show_canvas(&self.canvas, false);
    }
}

// The stylesheet hides the canvas by default; only a live field shows it.
fn show_canvas(canvas: &web::HtmlCanvasElement, visible: bool) {
    let css = canvas.style();
    let value = if visible { "visible" } else { "hidden" };
    _ = css.set_property("visibility", value);
}
