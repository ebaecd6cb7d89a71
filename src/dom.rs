use crate::core::lifecycle::guarded;
use crate::core::{Liveness, Subscription};
use std::str::FromStr;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` for `event` on `target`; the returned subscription removes it.
pub fn listen(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> Subscription {
    listen_with_options(target, event, handler, false)
}

/// Same as [`listen`] but registers a passive listener (scroll, pointer).
pub fn listen_passive(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> Subscription {
    listen_with_options(target, event, handler, true)
}

fn listen_with_options(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(web::Event) + 'static,
    passive: bool,
) -> Subscription {
    // events already queued when the subscription is released are dropped
    let live = Liveness::new();
    let closure = Closure::wrap(Box::new(guarded(&live, handler)) as Box<dyn FnMut(web::Event)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("addEventListener({}) failed: {:?}", event, e);
        return Subscription::empty();
    }
    let target = target.clone();
    Subscription::with_liveness(&live, move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        // only sound because release never runs from inside this handler
        drop(closure);
    })
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`, skipping anything that is not an HtmlElement.
pub fn html_elements(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    collect_html(root.query_selector_all(selector))
}

pub fn document_html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    collect_html(document.query_selector_all(selector))
}

fn collect_html(list: Result<web::NodeList, wasm_bindgen::JsValue>) -> Vec<web::HtmlElement> {
    let list = match list {
        Ok(l) => l,
        Err(e) => {
            log::warn!("querySelectorAll failed: {:?}", e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Parse a `data-*` override; malformed values are logged and ignored.
pub fn data_attr<T: FromStr>(el: &web::Element, name: &str) -> Option<T> {
    let raw = el.get_attribute(name)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring {}={:?} on #{}", name, raw, el.id());
            None
        }
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let (w, h) = web::window().map(|w| viewport_size(&w)).unwrap_or((0.0, 0.0));
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (w, h)
}
