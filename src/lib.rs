#![cfg(target_arch = "wasm32")]
use crate::core::spring::Spring2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod field;
mod frame;
mod motion;
mod observers;
mod particles;
mod render;
mod typer;

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Field and reveal lifecycles both follow the reduced-motion preference;
/// this runs once at startup and again on every change.
fn apply_motion_preference(
    reduced: bool,
    field: &field::Field,
    document: &web::Document,
    bindings: &Rc<RefCell<Vec<observers::RevealBinding>>>,
    registrations: &Rc<RefCell<Option<observers::Registrations>>>,
) {
    field.apply_preference(reduced);
    if reduced {
        if let Some(mut regs) = registrations.borrow_mut().take() {
            regs.dispose();
        }
        return;
    }
    let mut slot = registrations.borrow_mut();
    if slot.is_none() {
        match observers::setup_reveals(document, bindings.clone()) {
            Ok(regs) => *slot = Some(regs),
            Err(e) => log::error!("[reveal] setup error: {:?}", e),
        }
    }
}

fn wire_sound_toggle(document: &web::Document) {
    let pad = Rc::new(RefCell::new(audio::AmbientPad::new()));
    let document_label = document.clone();
    dom::add_click_listener(document, "sound-toggle", move || {
        let mut pad = pad.borrow_mut();
        if pad.sounding() {
            pad.disable();
        } else {
            pad.enable();
        }
        if let Some(btn) = document_label.get_element_by_id("sound-toggle") {
            let label = if pad.sounding() {
                "Som ambiente: ligado"
            } else {
                "Som ambiente: desligado"
            };
            btn.set_text_content(Some(label));
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nocturne starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::require_element(&document, "field-canvas")?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas);

    // Populate the star layer before reveals register, so the spans exist
    let star_layer = dom::require_element(&document, "star-layer")?;
    {
        let mut rng = rand::thread_rng();
        for star in core::starfield::generate_stars(core::starfield::STAR_COUNT, &mut rng) {
            dom::append_star(&document, &star_layer, &star);
        }
    }

    // Motion gate drives the field and the reveal registrations
    let gate = motion::MotionGate::read(&window);
    let field = field::Field::new(canvas.clone(), gate.flag());
    let reveal_bindings: Rc<RefCell<Vec<observers::RevealBinding>>> =
        Rc::new(RefCell::new(Vec::new()));
    let registrations: Rc<RefCell<Option<observers::Registrations>>> =
        Rc::new(RefCell::new(None));
    log::info!("[motion] reduced motion: {}", gate.reduced());
    apply_motion_preference(
        gate.reduced(),
        &field,
        &document,
        &reveal_bindings,
        &registrations,
    );
    {
        let field = field.clone();
        let document = document.clone();
        let bindings = reveal_bindings.clone();
        let registrations = registrations.clone();
        gate.subscribe(move |reduced| {
            log::info!("[motion] reduced motion: {}", reduced);
            apply_motion_preference(reduced, &field, &document, &bindings, &registrations);
        });
    }

    // Pointer feeds the field highlight and the moon parallax
    let pointer_uv = Rc::new(Cell::new((0.5_f32, 0.5_f32)));
    events::wire_field_pointer(&canvas, pointer_uv.clone());
    let moon_target = Rc::new(Cell::new((0.0_f32, 0.0_f32)));
    events::wire_parallax(
        &document,
        &window,
        "ceu-interior",
        moon_target.clone(),
        gate.flag(),
    )?;

    wire_sound_toggle(&document);

    {
        let interior = dom::require_element(&document, "ceu-interior")?;
        dom::add_click_listener(&document, "enter-night", move || {
            dom::scroll_to_element(&interior);
        });
    }

    // Heart burst: one shared path, one click listener, stacking emissions
    let heart_path = Rc::new(core::curve::heart_path(core::curve::HEART_SEGMENTS));
    let burst: Rc<RefCell<Vec<particles::ParticleBinding>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let document_spawn = document.clone();
        let container = dom::require_element(&document, "burst-field")?;
        let path = heart_path.clone();
        let live = burst.clone();
        dom::add_click_listener(&document, "burst-button", move || {
            particles::spawn_burst(&document_spawn, &container, &path, &live);
        });
    }

    // Typewriter lines; typing starts on first visibility
    let typers = {
        let mut rng = rand::thread_rng();
        vec![
            typer::bind(
                &document,
                "intro-line",
                constants::TYPE_INTRO_INTERVAL_MS,
                constants::TYPE_LIFELIKE_JITTER_MS,
                constants::TYPE_INTRO_TRAIL_HOLD_MS,
                &mut rng,
            )?,
            typer::bind(
                &document,
                "message-line",
                constants::TYPE_MESSAGE_INTERVAL_MS,
                0.0,
                0.0,
                &mut rng,
            )?,
        ]
    };

    let moon = dom::require_html_element(&document, "moon")?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gpu: field.slot(),
        canvas,
        pointer_uv,
        reveals: reveal_bindings,
        burst,
        typers,
        moon,
        moon_target,
        moon_spring: Spring2::new(
            constants::MOON_SPRING_STIFFNESS,
            constants::MOON_SPRING_DAMPING,
        ),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
