#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const LONG_TAGLINE: &str = "a tagline long enough to still be typing";

fn fixture(tagline: &str) -> web_sys::Document {
    // the start hook may already have mounted against an empty body
    folio_web::unmount();
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    body.set_inner_html(&format!(
        r#"<canvas id="starfield" data-count="25"></canvas>
           <div id="scroll-progress"></div>
           <span id="tagline-text" data-text="{tagline}" data-interval-ms="10"></span>
           <div class="glass-panel"><div class="panel-glow"></div></div>"#
    ));
    document
}

fn span_text(document: &web_sys::Document, class: &str) -> Option<String> {
    document
        .query_selector(&format!("#tagline-text .{class}"))
        .unwrap()
        .and_then(|el| el.text_content())
}

fn typed(document: &web_sys::Document) -> Option<String> {
    span_text(document, "tagline-typed")
}

fn cursor(document: &web_sys::Document) -> Option<String> {
    span_text(document, "tagline-cursor")
}

fn set_typed(document: &web_sys::Document, text: &str) {
    document
        .query_selector("#tagline-text .tagline-typed")
        .unwrap()
        .unwrap()
        .set_text_content(Some(text));
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn mount_and_unmount_round_trip() {
    let document = fixture("hi");
    folio_web::mount().unwrap();
    assert!(folio_web::is_mounted());

    let canvas = document
        .get_element_by_id("starfield")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    assert!(canvas.width() > 0);
    assert_eq!(typed(&document).as_deref(), Some(""));
    assert_eq!(cursor(&document).as_deref(), Some("_"));

    folio_web::unmount();
    assert!(!folio_web::is_mounted());
    // a second unmount is harmless
    folio_web::unmount();
}

#[wasm_bindgen_test]
fn mount_is_idempotent() {
    let document = fixture("hi");
    folio_web::mount().unwrap();
    folio_web::mount().unwrap();
    assert!(folio_web::is_mounted());
    // one set of spans, not two
    let spans = document.query_selector_all("#tagline-text span").unwrap();
    assert_eq!(spans.length(), 2);
    folio_web::unmount();
}

#[wasm_bindgen_test]
async fn unmount_mid_typing_stops_the_interval() {
    let document = fixture(LONG_TAGLINE);
    folio_web::mount().unwrap();
    sleep_ms(25).await;
    folio_web::unmount();

    let partial = typed(&document).unwrap();
    assert!(partial.len() < LONG_TAGLINE.len());
    set_typed(&document, "frozen");

    sleep_ms(100).await;
    assert_eq!(typed(&document).as_deref(), Some("frozen"));
    assert_eq!(cursor(&document).as_deref(), Some("_"));
}

#[wasm_bindgen_test]
async fn finished_tagline_does_not_tick_again() {
    let document = fixture("hi");
    folio_web::mount().unwrap();
    sleep_ms(100).await;
    assert_eq!(typed(&document).as_deref(), Some("hi"));

    // a live interval would write "hi" back
    set_typed(&document, "done");
    sleep_ms(60).await;
    assert_eq!(typed(&document).as_deref(), Some("done"));
    assert!(folio_web::is_mounted());
    folio_web::unmount();
}
