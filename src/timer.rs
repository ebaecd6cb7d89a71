use crate::core::{Flow, Liveness, Subscription};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Call `on_tick` every `period_ms` until it returns `Flow::Stop` or the
/// subscription is released. The interval clears itself on `Flow::Stop`.
pub fn every(period_ms: u32, mut on_tick: impl FnMut() -> Flow + 'static) -> anyhow::Result<Subscription> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let live = Liveness::new();
    let id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let live_inner = live.clone();
    let id_inner = id.clone();
    let window_inner = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        if !live_inner.is_alive() {
            return;
        }
        if on_tick().is_stop() {
            live_inner.kill();
            if let Some(handle) = id_inner.take() {
                window_inner.clear_interval_with_handle(handle);
            }
        }
    }) as Box<dyn FnMut()>);

    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms.min(i32::MAX as u32) as i32,
        )
        .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
    id.set(Some(handle));

    Ok(Subscription::with_liveness(&live, move || {
        if let Some(handle) = id.take() {
            window.clear_interval_with_handle(handle);
        }
        // must not run from inside `on_tick`: that would free the running closure
        drop(closure);
    }))
}
