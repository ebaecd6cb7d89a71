/// Page contract and presentation constants.
///
/// Element ids and class names the host page must provide, plus the
/// frame-timing limits shared by every animation loop.
// Element ids
pub const STARFIELD_CANVAS_ID: &str = "starfield";
pub const SCROLL_PROGRESS_ID: &str = "scroll-progress";
pub const TAGLINE_TEXT_ID: &str = "tagline-text";
pub const HERO_ID: &str = "hero";

// Class selectors
pub const PANEL_SELECTOR: &str = ".glass-panel";
pub const PANEL_GLOW_SELECTOR: &str = ".panel-glow";
pub const MARQUEE_TRACK_SELECTOR: &str = ".marquee-track";
pub const EQ_BAR_SELECTOR: &str = ".eq-bar";

// Classes put on the spans built inside the tagline element
pub const TAGLINE_TYPED_CLASS: &str = "tagline-typed";
pub const TAGLINE_CURSOR_CLASS: &str = "tagline-cursor"; // stylesheet blinks it

// Attributes read for runtime overrides / written for bookkeeping
pub const ATTR_COUNT: &str = "data-count";
pub const ATTR_COLOR: &str = "data-color";
pub const ATTR_TEXT: &str = "data-text";
pub const ATTR_INTERVAL_MS: &str = "data-interval-ms";
pub const ATTR_PANEL_INDEX: &str = "data-panel-index";

// Star field
pub const PARTICLE_COLOR: &str = "#8B5CF6"; // neon purple
pub const MAX_PARTICLE_COUNT: usize = 5_000; // cap for data-count overrides

// Reveal-on-scroll: fraction of a panel that must be visible
pub const REVEAL_THRESHOLD: f64 = 0.0;

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches / long stalls
pub const MIN_INTERVAL_MS: u32 = 10;
