#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod ambient;
mod constants;
mod core;
mod dom;
mod frame;
mod panels;
mod progress;
mod starfield;
mod tagline;
mod timer;

use ambient::Ambient;
use panels::Panels;
use progress::ScrollProgressBar;
use starfield::Starfield;
use tagline::Tagline;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Every mounted behaviour of the page. Dropping it tears them all down.
struct Page {
    // fields drop in declaration order
    starfield: Option<Starfield>,
    progress: Option<ScrollProgressBar>,
    tagline: Option<Tagline>,
    panels: Option<Panels>,
    ambient: Option<Ambient>,
}

impl Page {
    fn mount(document: &web::Document) -> Self {
        Self {
            starfield: mounted("starfield", Starfield::mount(document)),
            progress: mounted("progress", ScrollProgressBar::mount(document)),
            tagline: mounted("tagline", Tagline::mount(document)),
            panels: mounted("panels", Panels::mount(document)),
            ambient: mounted("ambient", Ambient::mount(document)),
        }
    }

    fn active(&self) -> usize {
        [
            self.starfield.is_some(),
            self.progress.is_some(),
            self.tagline.is_some(),
            self.panels.is_some(),
            self.ambient.is_some(),
        ]
        .iter()
        .filter(|on| **on)
        .count()
    }
}

// A failed component leaves its part of the page static.
fn mounted<T>(name: &str, result: anyhow::Result<Option<T>>) -> Option<T> {
    match result {
        Ok(component) => component,
        Err(e) => {
            log::error!("[{}] mount error: {:?}", name, e);
            None
        }
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    mount_into(&document);
    Ok(())
}

fn mount_into(document: &web::Document) {
    PAGE.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            log::info!("page already mounted");
            return;
        }
        let page = Page::mount(document);
        log::info!("page mounted ({} behaviours active)", page.active());
        *slot = Some(page);
    });
}

/// Mount every behaviour on the current document. No-op if already mounted.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    mount_into(&document);
    Ok(())
}

/// Release every listener, animation frame and timer owned by the page.
#[wasm_bindgen]
pub fn unmount() {
    // take first so component drops run without the slot borrowed
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if let Some(page) = page {
        drop(page);
        log::info!("page unmounted");
    }
}

/// Whether a page is currently mounted.
#[wasm_bindgen]
pub fn is_mounted() -> bool {
    PAGE.with(|slot| slot.borrow().is_some())
}
