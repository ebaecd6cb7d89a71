use crate::constants::{ATTR_COLOR, ATTR_COUNT, MAX_PARTICLE_COUNT, PARTICLE_COLOR, STARFIELD_CANVAS_ID};
use crate::core::{DisposeBag, FieldConfig, Flow, ParticleField};
use crate::{dom, frame};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Background particle field drawn on `#starfield`.
pub struct Starfield {
    subs: DisposeBag,
}

impl Starfield {
    /// Returns `Ok(None)` when the page has no usable canvas.
    pub fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let Some(canvas) = document
            .get_element_by_id(STARFIELD_CANVAS_ID)
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            log::warn!("[starfield] no <canvas id={}>; skipping", STARFIELD_CANVAS_ID);
            return Ok(None);
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext(2d) failed: {:?}", e))?
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
        else {
            log::warn!("[starfield] 2d context unavailable; skipping");
            return Ok(None);
        };

        let config = FieldConfig {
            count: dom::data_attr::<usize>(&canvas, ATTR_COUNT)
                .map(|n| n.min(MAX_PARTICLE_COUNT))
                .unwrap_or(FieldConfig::default().count),
            ..FieldConfig::default()
        };
        let color = canvas
            .get_attribute(ATTR_COLOR)
            .unwrap_or_else(|| PARTICLE_COLOR.to_string());

        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let field = Rc::new(RefCell::new(
            ParticleField::new(config, w as f32, h as f32, seed)
                .map_err(|e| anyhow::anyhow!("particle config: {e}"))?,
        ));
        if field.borrow().is_empty() {
            log::warn!("[starfield] {}=0; nothing to draw, skipping", ATTR_COUNT);
            return Ok(None);
        }
        log::info!("[starfield] {} particles on {}x{}", field.borrow().len(), w, h);

        let mut subs = DisposeBag::new();

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let canvas_resize = canvas.clone();
        let field_resize = field.clone();
        subs.push(dom::listen(&window, "resize", move |_| {
            let (w, h) = dom::sync_canvas_to_viewport(&canvas_resize);
            field_resize.borrow_mut().resize(w as f32, h as f32);
            log::debug!("[starfield] resized to {}x{}", w, h);
        }));

        subs.push(frame::start_loop(move |_dt| {
            let mut field = field.borrow_mut();
            draw(&ctx, &field, &color);
            field.step();
            Flow::Continue
        }));

        Ok(Some(Self { subs }))
    }
}

impl Drop for Starfield {
    fn drop(&mut self) {
        self.subs.dispose_all();
        log::info!("[starfield] unmounted");
    }
}

/// Clear the surface and paint every particle at its current opacity.
pub fn draw(ctx: &web::CanvasRenderingContext2d, field: &ParticleField, color: &str) {
    let bounds = field.bounds();
    ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
    ctx.set_fill_style_str(color);
    for p in field.particles() {
        ctx.begin_path();
        _ = ctx.arc(p.position.x as f64, p.position.y as f64, p.radius as f64, 0.0, TAU);
        ctx.set_global_alpha(p.opacity as f64);
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}
