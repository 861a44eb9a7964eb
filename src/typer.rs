use crate::core::typer::{self, TypeSchedule};
use crate::dom;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A text line revealed character by character, starting the first time the
/// element scrolls into view. Copy comes from the element's `data-text`
/// attribute so the markup stays the single source of the words.
pub struct TyperBinding {
    el: web::HtmlElement,
    chars: Vec<char>,
    schedule: TypeSchedule,
    started: Rc<Cell<bool>>,
    elapsed_sec: f64,
    shown: usize,
    done: bool,
}

/// Bind a typed line to the element with `id`. The element is emptied now
/// and refilled by `advance`; a one-shot observer arms the clock on first
/// visibility.
pub fn bind(
    document: &web::Document,
    id: &str,
    interval_ms: f64,
    jitter_ms: f64,
    trail_hold_ms: f64,
    rng: &mut impl Rng,
) -> anyhow::Result<TyperBinding> {
    let el = dom::require_html_element(document, id)?;
    let text = el.get_attribute("data-text").unwrap_or_default();
    let chars: Vec<char> = text.chars().collect();
    el.set_text_content(Some(""));
    let schedule = typer::type_schedule(chars.len(), interval_ms, jitter_ms, trail_hold_ms, rng);

    let started = Rc::new(Cell::new(false));
    {
        let flag = started.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, obs: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        flag.set(true);
                        obs.disconnect();
                        break;
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
        let observer = web::IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
        observer.observe(&el);
        callback.forget();
    }

    Ok(TyperBinding {
        el,
        chars,
        schedule,
        started,
        elapsed_sec: 0.0,
        shown: 0,
        done: false,
    })
}

impl TyperBinding {
    /// Advance the clock; returns false once the line is fully typed and the
    /// trailing hold has passed, so the binding can be dropped.
    pub fn advance(&mut self, dt_sec: f64) -> bool {
        if self.done {
            return false;
        }
        if !self.started.get() {
            return true;
        }
        self.elapsed_sec += dt_sec;
        let revealed = typer::revealed_count(&self.schedule, self.elapsed_sec);
        if revealed != self.shown {
            self.shown = revealed;
            let prefix: String = self.chars[..revealed].iter().collect();
            self.el.set_text_content(Some(&prefix));
        }
        if self.shown >= self.chars.len() && self.elapsed_sec >= self.schedule.total_sec {
            self.done = true;
            return false;
        }
        true
    }
}
