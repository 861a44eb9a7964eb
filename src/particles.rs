use crate::core::curve::{self, CurvePoint};
use crate::core::timeline::TweenPlayer;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A live burst particle. The span is exclusively owned here and removed
/// from the page when its schedule completes.
pub struct ParticleBinding {
    pub el: web::HtmlElement,
    pub player: TweenPlayer,
}

/// Spawn one full emission into the container. Bursts are independent;
/// repeated requests stack their own particles and complete on their own.
pub fn spawn_burst(
    document: &web::Document,
    container: &web::Element,
    path: &[CurvePoint],
    live: &Rc<RefCell<Vec<ParticleBinding>>>,
) {
    let mut rng = rand::thread_rng();
    let targets = curve::burst_targets(
        path,
        curve::BURST_PARTICLE_COUNT,
        curve::BURST_RADIUS_PX,
        curve::BURST_JITTER_PX,
        &mut rng,
    );
    let mut spawned = 0;
    for (tx, ty) in targets {
        let Ok(el) = document.create_element("span") else {
            continue;
        };
        el.set_class_name("particle");
        let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        _ = container.append_child(&el);

        let mut player = TweenPlayer::new(curve::particle_timeline(tx as f32, ty as f32));
        player.play(0.0);
        dom::apply_particle_style(&el, &player.timeline.sample(0.0));
        live.borrow_mut().push(ParticleBinding { el, player });
        spawned += 1;
    }
    log::info!("[burst] {} particles released", spawned);
}

/// Advance every live particle by `dt` and remove the finished ones.
pub fn advance(live: &Rc<RefCell<Vec<ParticleBinding>>>, dt_sec: f32) {
    let mut list = live.borrow_mut();
    list.retain_mut(|p| {
        let style = p.player.step(dt_sec);
        dom::apply_particle_style(&p.el, &style);
        if p.player.finished() {
            p.el.remove();
            false
        } else {
            true
        }
    });
}
