use crate::constants::{
    ATTR_INTERVAL_MS, ATTR_TEXT, MIN_INTERVAL_MS, TAGLINE_CURSOR_CLASS, TAGLINE_TEXT_ID,
    TAGLINE_TYPED_CLASS,
};
use crate::core::typewriter::{CURSOR_GLYPH, DEFAULT_INTERVAL_MS, DEFAULT_TAGLINE};
use crate::core::{DisposeBag, Typewriter};
use crate::{dom, timer};
use web_sys as web;

/// Typewriter tagline in the hero block.
///
/// Every mount starts from an empty string; the interval stops itself once
/// the whole text is visible. The host element is rebuilt as two spans, the
/// typed text and a cursor that the stylesheet blinks via its class.
pub struct Tagline {
    subs: DisposeBag,
}

impl Tagline {
    pub fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let Some(el) = dom::html_element_by_id(document, TAGLINE_TEXT_ID) else {
            log::warn!("[tagline] no #{}; skipping", TAGLINE_TEXT_ID);
            return Ok(None);
        };

        let text = el
            .get_attribute(ATTR_TEXT)
            .unwrap_or_else(|| DEFAULT_TAGLINE.to_string());
        let interval_ms = dom::data_attr::<u32>(&el, ATTR_INTERVAL_MS)
            .unwrap_or(DEFAULT_INTERVAL_MS)
            .max(MIN_INTERVAL_MS);

        let mut writer = Typewriter::new(text);
        let typed = build_spans(document, &el)?;

        let mut subs = DisposeBag::new();
        if writer.is_empty() {
            log::warn!("[tagline] empty text; showing the cursor only");
            return Ok(Some(Self { subs }));
        }
        subs.push(timer::every(interval_ms, move || {
            let flow = writer.tick();
            typed.set_text_content(Some(writer.visible()));
            if flow.is_stop() {
                log::info!("[tagline] fully revealed ({} chars)", writer.len());
            }
            flow
        })?);

        log::info!("[tagline] mounted, {} ms per character", interval_ms);
        Ok(Some(Self { subs }))
    }
}

/// Replace the host's children with the typed span and the cursor span,
/// returning the typed span.
fn build_spans(document: &web::Document, host: &web::HtmlElement) -> anyhow::Result<web::Element> {
    host.set_text_content(None);
    let span = |class: &str| -> anyhow::Result<web::Element> {
        let el = document
            .create_element("span")
            .map_err(|e| anyhow::anyhow!("create span: {:?}", e))?;
        el.set_class_name(class);
        host.append_child(&el)
            .map_err(|e| anyhow::anyhow!("append span: {:?}", e))?;
        Ok(el)
    };
    let typed = span(TAGLINE_TYPED_CLASS)?;
    let cursor = span(TAGLINE_CURSOR_CLASS)?;
    cursor.set_text_content(Some(&CURSOR_GLYPH.to_string()));
    Ok(typed)
}

impl Drop for Tagline {
    fn drop(&mut self) {
        self.subs.dispose_all();
        log::info!("[tagline] unmounted");
    }
}
