use crate::constants::{ATTR_PANEL_INDEX, PANEL_GLOW_SELECTOR, PANEL_SELECTOR, REVEAL_THRESHOLD};
use crate::core::{DisposeBag, Flow, PanelHighlight, Reveal, Subscription};
use crate::{dom, frame};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct PanelState {
    el: web::HtmlElement,
    glow: Option<web::HtmlElement>,
    highlight: PanelHighlight,
    reveal: Reveal,
}

/// Cursor glow and reveal-on-scroll for every `.glass-panel`.
pub struct Panels {
    subs: DisposeBag,
}

impl Panels {
    pub fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let elements = dom::document_html_elements(document, PANEL_SELECTOR);
        if elements.is_empty() {
            log::warn!("[panels] no {} elements; skipping", PANEL_SELECTOR);
            return Ok(None);
        }

        let panels: Rc<RefCell<Vec<PanelState>>> = Rc::new(RefCell::new(Vec::new()));
        let mut subs = DisposeBag::new();

        for (i, el) in elements.into_iter().enumerate() {
            _ = el.set_attribute(ATTR_PANEL_INDEX, &i.to_string());
            let glow = dom::html_elements(&el, PANEL_GLOW_SELECTOR).into_iter().next();
            if let Some(g) = &glow {
                dom::set_style(g, "opacity", "0");
            }
            let reveal = Reveal::on_scroll_into_view()?;
            apply_reveal(&el, &reveal);
            subs.extend(wire_pointer(&el, i, &panels));
            panels.borrow_mut().push(PanelState {
                el,
                glow,
                highlight: PanelHighlight::new(),
                reveal,
            });
        }

        match observe_reveals(&panels) {
            Ok(sub) => subs.push(sub),
            Err(e) => {
                // no observer: show everything right away
                log::warn!("[panels] IntersectionObserver unavailable ({e}); revealing all");
                for p in panels.borrow_mut().iter_mut() {
                    p.reveal.observe(true);
                }
            }
        }

        let count = panels.borrow().len();
        subs.push(frame::start_loop(move |dt_sec| {
            for p in panels.borrow_mut().iter_mut() {
                if p.reveal.is_started() && !p.reveal.is_finished() {
                    p.reveal.tick(dt_sec);
                    apply_reveal(&p.el, &p.reveal);
                }
                if p.highlight.tick(dt_sec) {
                    if let Some(glow) = &p.glow {
                        dom::set_style(glow, "opacity", &p.highlight.opacity().to_string());
                    }
                }
            }
            Flow::Continue
        }));

        log::info!("[panels] mounted {} panels", count);
        Ok(Some(Self { subs }))
    }
}

impl Drop for Panels {
    fn drop(&mut self) {
        self.subs.dispose_all();
        log::info!("[panels] unmounted");
    }
}

fn wire_pointer(
    el: &web::HtmlElement,
    index: usize,
    panels: &Rc<RefCell<Vec<PanelState>>>,
) -> [Subscription; 2] {
    let panels_move = panels.clone();
    let el_move = el.clone();
    let on_move = dom::listen_passive(el, "pointermove", move |ev| {
        let ev: &web::PointerEvent = ev.unchecked_ref();
        let rect = el_move.get_bounding_client_rect();
        let local = Vec2::new(
            (ev.client_x() as f64 - rect.left()) as f32,
            (ev.client_y() as f64 - rect.top()) as f32,
        );
        let size = Vec2::new(rect.width() as f32, rect.height() as f32);
        if let Some(p) = panels_move.borrow_mut().get_mut(index) {
            p.highlight.pointer_move(local, size);
            // outside the bounds the glow fades where it last was
            if let (true, Some(glow)) = (p.highlight.is_hovered(), &p.glow) {
                dom::set_style(glow, "background", &p.highlight.gradient_css());
            }
        }
    });

    let panels_leave = panels.clone();
    let on_leave = dom::listen_passive(el, "pointerleave", move |_| {
        if let Some(p) = panels_leave.borrow_mut().get_mut(index) {
            p.highlight.pointer_leave();
        }
    });

    [on_move, on_leave]
}

fn apply_reveal(el: &web::HtmlElement, reveal: &Reveal) {
    let f = reveal.frame();
    dom::set_style(el, "opacity", &f.opacity.to_string());
    dom::set_style(el, "transform", &f.css_transform());
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Start each panel's reveal the first time it intersects the viewport, then
/// stop watching it.
fn observe_reveals(panels: &Rc<RefCell<Vec<PanelState>>>) -> anyhow::Result<Subscription> {
    let panels_cb = panels.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let index = target
                    .get_attribute(ATTR_PANEL_INDEX)
                    .and_then(|s| s.parse::<usize>().ok());
                if let Some(i) = index {
                    if let Some(p) = panels_cb.borrow_mut().get_mut(i) {
                        p.reveal.observe(true);
                    }
                }
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for p in panels.borrow().iter() {
        observer.observe(&p.el);
    }

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}
