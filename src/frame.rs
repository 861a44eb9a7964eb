use crate::core::spring::Spring2;
use crate::dom;
use crate::field::FieldSlot;
use crate::observers::RevealBinding;
use crate::particles::{self, ParticleBinding};
use crate::typer::TyperBinding;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick advances: the wave field, reveal players,
/// burst particles, typewriters, and the moon's parallax spring.
pub struct FrameContext {
    pub gpu: FieldSlot,
    pub canvas: web::HtmlCanvasElement,
    pub pointer_uv: Rc<Cell<(f32, f32)>>,

    pub reveals: Rc<RefCell<Vec<RevealBinding>>>,
    pub burst: Rc<RefCell<Vec<ParticleBinding>>>,
    pub typers: Vec<TyperBinding>,

    pub moon: web::HtmlElement,
    pub moon_target: Rc<Cell<(f32, f32)>>,
    pub moon_spring: Spring2,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Scroll reveals: players that are mid-flight write their style
        {
            let mut reveals = self.reveals.borrow_mut();
            for binding in reveals.iter_mut() {
                if binding.player.at_rest() {
                    continue;
                }
                let style = binding.player.step(dt);
                dom::apply_reveal_style(&binding.el, &style);
            }
        }

        // Burst particles
        particles::advance(&self.burst, dt);

        // Typewriters; finished ones drop out
        self.typers.retain_mut(|t| t.advance(dt as f64));

        // Moon parallax spring
        {
            let (tx, ty) = self.moon_target.get();
            let pos = self.moon_spring.step(Vec2::new(tx, ty), dt);
            let css = self.moon.style();
            _ = css.set_property(
                "transform",
                &format!("translate({:.2}px, {:.2}px)", pos.x, pos.y),
            );
        }

        // Wave field, when the motion gate has one alive
        if let Some(gpu) = self.gpu.borrow_mut().as_mut() {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            let (u, v) = self.pointer_uv.get();
            gpu.set_pointer(u, v);
            if let Err(e) = gpu.render(dt) {
                log::error!("[field] render error: {:?}", e);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
