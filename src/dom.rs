use crate::constants::HIDDEN_OPACITY_EPSILON;
use crate::core::starfield::Star;
use crate::core::timeline::Style;
use anyhow::Context;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element the page cannot run without.
pub fn require_element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .with_context(|| format!("missing #{id}"))
}

pub fn require_html_element(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlElement> {
    require_element(document, id)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not an HTML element: {:?}", e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Write a sampled reveal style. Fully transparent elements also get
/// `visibility: hidden` so they drop out of hit testing.
pub fn apply_reveal_style(el: &web::HtmlElement, style: &Style) {
    let css = el.style();
    _ = css.set_property("opacity", &format!("{:.4}", style.opacity));
    _ = css.set_property(
        "transform",
        &format!(
            "translate({:.2}px, {:.2}px) scale({:.4})",
            style.translate_x, style.translate_y, style.scale
        ),
    );
    if style.opacity <= HIDDEN_OPACITY_EPSILON {
        _ = css.set_property("visibility", "hidden");
    } else {
        _ = css.remove_property("visibility");
    }
}

/// Drop every property the reveal layer may have written, returning the
/// element to its stylesheet appearance.
pub fn clear_reveal_style(el: &web::HtmlElement) {
    let css = el.style();
    _ = css.remove_property("opacity");
    _ = css.remove_property("transform");
    _ = css.remove_property("visibility");
}

/// Write a sampled particle style. Particles stay centered on their origin;
/// the timeline's translation is applied on top of the centering offset.
pub fn apply_particle_style(el: &web::HtmlElement, style: &Style) {
    let css = el.style();
    _ = css.set_property("opacity", &format!("{:.4}", style.opacity));
    _ = css.set_property(
        "transform",
        &format!(
            "translate(-50%, -50%) translate({:.2}px, {:.2}px) scale({:.4})",
            style.translate_x, style.translate_y, style.scale
        ),
    );
}

/// Append one generated star to the layer.
pub fn append_star(document: &web::Document, layer: &web::Element, star: &Star) {
    let Ok(el) = document.create_element("span") else {
        return;
    };
    el.set_class_name("star");
    if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
        let css = el.style();
        _ = css.set_property("top", &format!("{:.3}%", star.top_pct));
        _ = css.set_property("left", &format!("{:.3}%", star.left_pct));
        _ = css.set_property("width", &format!("{:.2}px", star.size_px));
        _ = css.set_property("height", &format!("{:.2}px", star.size_px));
        _ = css.set_property("animation-delay", &format!("{:.3}s", star.twinkle_delay_sec));
        _ = layer.append_child(&el);
    }
}

/// Smoothly bring a section into view.
pub fn scroll_to_element(el: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
