use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element by id and cast it, failing fast when the page shell
/// is missing a required node (a programming error, not a runtime one).
pub fn require_element(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not an HtmlElement: {e:?}"))
}

/// Best-effort inline style write.
#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

#[inline]
pub fn remove_style(el: &web::HtmlElement, prop: &str) {
    _ = el.style().remove_property(prop);
}

/// Viewport height in CSS pixels; 0 when unavailable.
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
