use crate::constants::{EQ_BAR_SELECTOR, HERO_ID, MARQUEE_TRACK_SELECTOR};
use crate::core::motion::{equalizer_height, marquee_offset_percent};
use crate::core::{DisposeBag, Flow, Reveal};
use crate::{dom, frame};
use web_sys as web;

/// Time-driven decoration that needs no input: hero entrance, marquee
/// scroll and the equalizer bars.
pub struct Ambient {
    subs: DisposeBag,
}

impl Ambient {
    pub fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let hero = dom::html_element_by_id(document, HERO_ID);
        let tracks = dom::document_html_elements(document, MARQUEE_TRACK_SELECTOR);
        let bars = dom::document_html_elements(document, EQ_BAR_SELECTOR);
        if hero.is_none() && tracks.is_empty() && bars.is_empty() {
            log::warn!("[ambient] nothing to animate; skipping");
            return Ok(None);
        }

        let mut entrance = match hero {
            Some(el) => Some((el, Reveal::entrance()?)),
            None => None,
        };
        if let Some((el, reveal)) = &entrance {
            apply(el, reveal);
        }

        let mut elapsed = 0.0_f64;
        let mut subs = DisposeBag::new();
        subs.push(frame::start_loop(move |dt_sec| {
            elapsed += dt_sec as f64;

            let entered = match &mut entrance {
                Some((el, reveal)) => {
                    reveal.tick(dt_sec);
                    apply(el, reveal);
                    reveal.is_finished()
                }
                None => false,
            };
            if entered {
                entrance = None;
            }

            let offset = format!("translateX({}%)", marquee_offset_percent(elapsed));
            for track in &tracks {
                dom::set_style(track, "transform", &offset);
            }
            for (i, bar) in bars.iter().enumerate() {
                dom::set_style(bar, "height", &format!("{}px", equalizer_height(elapsed, i)));
            }
            Flow::Continue
        }));

        log::info!("[ambient] mounted");
        Ok(Some(Self { subs }))
    }
}

impl Drop for Ambient {
    fn drop(&mut self) {
        self.subs.dispose_all();
        log::info!("[ambient] unmounted");
    }
}

fn apply(el: &web::HtmlElement, reveal: &Reveal) {
    let f = reveal.frame();
    dom::set_style(el, "opacity", &f.opacity.to_string());
    dom::set_style(el, "transform", &f.css_transform());
}
