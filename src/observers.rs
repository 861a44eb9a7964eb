use crate::core::reveal::{self, RevealAction, RevealKind};
use crate::core::timeline::TweenPlayer;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One scroll-revealed element and its playback head. The frame loop steps
/// every binding; observer callbacks only change playback direction.
pub struct RevealBinding {
    pub el: web::HtmlElement,
    pub player: TweenPlayer,
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Everything one reveal setup registered, revocable as a unit: observers
/// are disconnected, callbacks dropped, and elements restored to their
/// stylesheet appearance. Dispose is idempotent and runs on drop.
pub struct Registrations {
    observers: Vec<web::IntersectionObserver>,
    callbacks: Vec<ObserverCallback>,
    bindings: Rc<RefCell<Vec<RevealBinding>>>,
    disposed: bool,
}

impl Registrations {
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        for obs in self.observers.drain(..) {
            obs.disconnect();
        }
        self.callbacks.clear();
        let mut bindings = self.bindings.borrow_mut();
        for binding in bindings.iter() {
            dom::clear_reveal_style(&binding.el);
        }
        bindings.clear();
        log::info!("[reveal] registrations disposed");
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Drop for Registrations {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Register enter/exit transitions for every star marker, phrase block and
/// the moon orbit. Elements snap to their hidden state immediately; the
/// returned handle revokes the whole batch.
pub fn setup_reveals(
    document: &web::Document,
    bindings: Rc<RefCell<Vec<RevealBinding>>>,
) -> anyhow::Result<Registrations> {
    let mut regs = Registrations {
        observers: Vec::new(),
        callbacks: Vec::new(),
        bindings: bindings.clone(),
        disposed: false,
    };

    for (selector, kind) in [(".star", RevealKind::Star), (".cosmic-phrase", RevealKind::Phrase)] {
        let list = document
            .query_selector_all(selector)
            .map_err(|e| anyhow::anyhow!("query {selector}: {:?}", e))?;
        let mut index_in_kind = 0;
        for i in 0..list.length() {
            let Some(node) = list.item(i) else { continue };
            if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                register(&mut regs, el, kind, index_in_kind)?;
                index_in_kind += 1;
            }
        }
    }
    let moon = dom::require_html_element(document, "moon-orbit")?;
    register(&mut regs, moon, RevealKind::MoonOrbit, 0)?;

    log::info!("[reveal] {} transitions registered", regs.observer_count());
    Ok(regs)
}

fn register(
    regs: &mut Registrations,
    el: web::HtmlElement,
    kind: RevealKind,
    index_in_kind: usize,
) -> anyhow::Result<()> {
    let player = TweenPlayer::new(kind.timeline());
    dom::apply_reveal_style(&el, &player.timeline.sample(0.0));

    let slot = regs.bindings.borrow().len();
    regs.bindings
        .borrow_mut()
        .push(RevealBinding { el: el.clone(), player });

    let delay = kind.stagger_delay(index_in_kind);
    let bindings = regs.bindings.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let top = entry.bounding_client_rect().top();
                let mut bindings = bindings.borrow_mut();
                let Some(binding) = bindings.get_mut(slot) else {
                    return;
                };
                match reveal::action_for(entry.is_intersecting(), top) {
                    RevealAction::Play => binding.player.play(delay),
                    RevealAction::Reverse => binding.player.reverse(),
                    RevealAction::Complete => {
                        // Snapping leaves the player at rest, so the frame
                        // loop will not touch it; write the style here.
                        binding.player.complete();
                        let head = binding.player.head();
                        let style = binding.player.timeline.sample(head);
                        dom::apply_reveal_style(&binding.el, &style);
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(_, _)>);

    let init = web::IntersectionObserverInit::new();
    let bottom_pct = reveal::root_margin_bottom_pct(kind.enter_fraction()).round() as i32;
    init.set_root_margin(&format!("0px 0px {bottom_pct}% 0px"));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    observer.observe(&el);

    regs.observers.push(observer);
    regs.callbacks.push(callback);
    Ok(())
}
