use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{Flow, Liveness, Subscription};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Run `on_frame(dt_sec)` once per display refresh until it returns
/// `Flow::Stop` or the returned subscription is released.
///
/// `dt_sec` is measured between callbacks and capped at `MAX_FRAME_DT_SEC`;
/// the first frame sees 0.
pub fn start_loop(mut on_frame: impl FnMut(f32) -> Flow + 'static) -> Subscription {
    let Some(window) = web::window() else {
        log::warn!("no window; animation loop not started");
        return Subscription::empty();
    };

    let live = Liveness::new();
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: TickSlot = Rc::new(RefCell::new(None));

    let tick_inner = tick.clone();
    let live_inner = live.clone();
    let handle_inner = handle.clone();
    let window_inner = window.clone();
    let mut last: Option<Instant> = None;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_inner.set(None);
        if !live_inner.is_alive() {
            return;
        }
        let now = Instant::now();
        let dt_sec = last
            .map(|prev| (now - prev).as_secs_f32().min(MAX_FRAME_DT_SEC))
            .unwrap_or(0.0);
        last = Some(now);

        if on_frame(dt_sec).is_stop() {
            live_inner.kill();
            return;
        }
        if let Some(cb) = tick_inner.borrow().as_ref() {
            handle_inner.set(request_frame(&window_inner, cb));
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = tick.borrow().as_ref() {
        handle.set(request_frame(&window, cb));
    }

    Subscription::with_liveness(&live, move || {
        if let Some(id) = handle.take() {
            _ = window.cancel_animation_frame(id);
        }
        // breaks the closure -> slot -> closure cycle; dropping the closure is
        // only safe here because release never runs inside `on_frame`
        tick.borrow_mut().take();
    })
}

fn request_frame(window: &web::Window, cb: &Closure<dyn FnMut()>) -> Option<i32> {
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::tests::sleep_ms;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    async fn disposed_loop_stops_requesting_frames() {
        let frames = Rc::new(Cell::new(0u32));
        let seen = frames.clone();
        let sub = start_loop(move |_| {
            seen.set(seen.get() + 1);
            Flow::Continue
        });
        sleep_ms(100).await;
        sub.dispose();
        let at_dispose = frames.get();
        assert!(at_dispose > 0);

        sleep_ms(100).await;
        assert_eq!(frames.get(), at_dispose);
    }

    #[wasm_bindgen_test]
    async fn stop_ends_the_loop_and_first_dt_is_zero() {
        let dts = Rc::new(RefCell::new(Vec::new()));
        let seen = dts.clone();
        let _sub = start_loop(move |dt| {
            seen.borrow_mut().push(dt);
            if seen.borrow().len() == 3 {
                Flow::Stop
            } else {
                Flow::Continue
            }
        });
        sleep_ms(200).await;

        let dts = dts.borrow();
        assert_eq!(dts.len(), 3);
        assert_eq!(dts[0], 0.0);
        assert!(dts.iter().all(|dt| *dt <= MAX_FRAME_DT_SEC));
    }
}
