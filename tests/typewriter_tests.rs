// Host-side tests for the typewriter tagline.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod lifecycle {
        include!("../src/core/lifecycle.rs");
    }
    pub mod typewriter {
        include!("../src/core/typewriter.rs");
    }
}

use crate::core::lifecycle::Flow;
use crate::core::typewriter::*;

/// Drive `writer` like an interval timer that clears itself on `Flow::Stop`.
/// Returns how many times the timer fired.
fn run_timer(writer: &mut Typewriter, max_fires: usize) -> usize {
    let mut fires = 0;
    let mut active = true;
    while active && fires < max_fires {
        fires += 1;
        if writer.tick().is_stop() {
            active = false;
        }
    }
    fires
}

#[test]
fn starts_empty() {
    let w = Typewriter::new(DEFAULT_TAGLINE);
    assert_eq!(w.visible(), "");
    assert!(!w.is_done());
    assert_eq!(CURSOR_GLYPH, '_');
}

#[test]
fn each_tick_reveals_one_character() {
    let mut w = Typewriter::new("hello");
    assert_eq!(w.tick(), Flow::Continue);
    assert_eq!(w.visible(), "h");
    assert_eq!(w.tick(), Flow::Continue);
    assert_eq!(w.visible(), "he");
    w.tick();
    w.tick();
    assert_eq!(w.tick(), Flow::Stop);
    assert_eq!(w.visible(), "hello");
}

#[test]
fn visible_length_is_min_of_ticks_and_text_length() {
    let text = DEFAULT_TAGLINE;
    let len = text.chars().count();
    for ticks in 0..len + 10 {
        let mut w = Typewriter::new(text);
        for _ in 0..ticks {
            w.tick();
        }
        assert_eq!(w.visible().chars().count(), ticks.min(len));
    }
}

#[test]
fn timer_fires_exactly_len_times() {
    let mut w = Typewriter::new(DEFAULT_TAGLINE);
    let fires = run_timer(&mut w, 1_000);
    assert_eq!(fires, w.len());
    assert_eq!(fires, 33);
    assert!(w.is_done());
}

#[test]
fn late_tick_after_completion_changes_nothing() {
    let mut w = Typewriter::new("ab");
    w.tick();
    w.tick();
    assert_eq!(w.tick(), Flow::Stop);
    assert_eq!(w.tick(), Flow::Stop);
    assert_eq!(w.visible(), "ab");
}

#[test]
fn empty_text_stops_on_first_tick() {
    let mut w = Typewriter::new("");
    assert!(w.is_empty());
    assert!(w.is_done());
    assert_eq!(w.tick(), Flow::Stop);
    assert_eq!(w.visible(), "");
}

#[test]
fn multibyte_text_is_revealed_per_character() {
    let mut w = Typewriter::new("héllo ✨");
    assert_eq!(w.len(), 7);
    w.tick();
    w.tick();
    assert_eq!(w.visible(), "hé");
    run_timer(&mut w, 100);
    assert_eq!(w.visible(), "héllo ✨");
}

#[test]
fn default_interval_types_the_tagline_in_a_few_seconds() {
    let total_ms = DEFAULT_TAGLINE.chars().count() as u32 * DEFAULT_INTERVAL_MS;
    assert_eq!(total_ms, 3_300);
}
