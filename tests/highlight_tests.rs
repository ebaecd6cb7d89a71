// Host-side tests for the pointer-reactive panel glow.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod highlight {
        include!("../src/core/highlight.rs");
    }
}

use crate::core::highlight::*;
use glam::Vec2;

const PANEL: Vec2 = Vec2::new(400.0, 300.0);

fn fade_fully(h: &mut PanelHighlight) {
    for _ in 0..100 {
        h.tick(1.0 / 60.0);
    }
}

#[test]
fn move_inside_sets_center() {
    let mut h = PanelHighlight::new();
    h.pointer_move(Vec2::new(120.0, 45.5), PANEL);
    assert_eq!(h.center(), Vec2::new(120.0, 45.5));
    assert!(h.is_hovered());
}

#[test]
fn move_outside_keeps_center_and_fades() {
    let mut h = PanelHighlight::new();
    h.pointer_move(Vec2::new(10.0, 20.0), PANEL);
    fade_fully(&mut h);
    assert_eq!(h.opacity(), 1.0);

    h.pointer_move(Vec2::new(450.0, 20.0), PANEL);
    assert!(!h.is_hovered());
    assert_eq!(h.center(), Vec2::new(10.0, 20.0));

    let before = h.opacity();
    h.tick(0.05);
    assert!(h.opacity() < before);
    fade_fully(&mut h);
    assert_eq!(h.opacity(), 0.0);
    assert_eq!(h.center(), Vec2::new(10.0, 20.0));
}

#[test]
fn leave_fades_without_moving_center() {
    let mut h = PanelHighlight::new();
    h.pointer_move(Vec2::new(200.0, 150.0), PANEL);
    fade_fully(&mut h);
    h.pointer_leave();
    fade_fully(&mut h);
    assert_eq!(h.opacity(), 0.0);
    assert_eq!(h.center(), Vec2::new(200.0, 150.0));
}

#[test]
fn fade_takes_the_configured_duration() {
    let mut h = PanelHighlight::new();
    h.pointer_move(Vec2::new(1.0, 1.0), PANEL);
    assert!(h.tick(GLOW_FADE_SEC / 2.0));
    assert!((h.opacity() - 0.5).abs() < 1e-5);
    assert!(h.tick(GLOW_FADE_SEC));
    assert_eq!(h.opacity(), 1.0);
    // nothing left to change
    assert!(!h.tick(0.1));
}

#[test]
fn edges_count_as_inside() {
    assert!(contains(Vec2::ZERO, PANEL));
    assert!(contains(PANEL, PANEL));
    assert!(!contains(Vec2::new(-0.5, 10.0), PANEL));
    assert!(!contains(Vec2::new(10.0, 300.5), PANEL));
}

#[test]
fn gradient_is_centred_on_pointer() {
    let mut h = PanelHighlight::new();
    h.pointer_move(Vec2::new(12.5, 40.0), PANEL);
    assert_eq!(
        h.gradient_css(),
        "radial-gradient(650px circle at 12.5px 40px, rgba(139, 92, 246, 0.15), transparent 80%)"
    );
}
