use crate::constants::SCROLL_PROGRESS_ID;
use crate::core::{scroll_progress, DisposeBag, Flow, ScrollIndicator, SpringConfig};
use crate::{dom, frame};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Spring-smoothed reading bar pinned to the top of the page.
pub struct ScrollProgressBar {
    subs: DisposeBag,
}

impl ScrollProgressBar {
    pub fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let Some(bar) = dom::html_element_by_id(document, SCROLL_PROGRESS_ID) else {
            log::warn!("[progress] no #{}; skipping", SCROLL_PROGRESS_ID);
            return Ok(None);
        };
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

        let indicator = Rc::new(RefCell::new(ScrollIndicator::new(SpringConfig::default())?));
        indicator.borrow_mut().on_scroll(read_progress(&window));
        dom::set_style(&bar, "transform-origin", "left");
        dom::set_style(&bar, "transform", "scaleX(0)");

        let mut subs = DisposeBag::new();

        let indicator_scroll = indicator.clone();
        let window_scroll = window.clone();
        subs.push(dom::listen_passive(&window, "scroll", move |_| {
            indicator_scroll
                .borrow_mut()
                .on_scroll(read_progress(&window_scroll));
        }));

        let mut last_written = f32::NAN;
        subs.push(frame::start_loop(move |dt_sec| {
            let mut indicator = indicator.borrow_mut();
            if indicator.is_settled() && indicator.scale() == last_written {
                return Flow::Continue;
            }
            let scale = indicator.tick(dt_sec);
            if scale != last_written {
                dom::set_style(&bar, "transform", &format!("scaleX({scale})"));
                last_written = scale;
            }
            Flow::Continue
        }));

        log::info!("[progress] mounted");
        Ok(Some(Self { subs }))
    }
}

impl Drop for ScrollProgressBar {
    fn drop(&mut self) {
        self.subs.dispose_all();
        log::info!("[progress] unmounted");
    }
}

fn read_progress(window: &web::Window) -> f32 {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport = dom::viewport_size(window).1;
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_progress(offset, scroll_height, viewport)
}
