use super::error::{require_non_negative, require_positive, ConfigError};

// Hero entrance: slide in from the left.
pub const ENTRANCE_DURATION_SEC: f32 = 0.8;
pub const ENTRANCE_OFFSET_X_PX: f32 = -50.0;

// Panel reveal on first intersection.
pub const REVEAL_DURATION_SEC: f32 = 0.5;
pub const REVEAL_OFFSET_Y_PX: f32 = 20.0;

// Tech-stack marquee; the track holds the list twice so -50% is seamless.
pub const MARQUEE_PERIOD_SEC: f32 = 20.0;
pub const MARQUEE_TRAVEL_PERCENT: f32 = -50.0;

// "Now playing" equalizer bars.
pub const EQ_MIN_HEIGHT_PX: f32 = 4.0;
pub const EQ_MAX_HEIGHT_PX: f32 = 16.0;
pub const EQ_PERIOD_SEC: f32 = 0.8;
pub const EQ_STAGGER_SEC: f32 = 0.1;

/// One-shot time-based transition with an ease-out cubic curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    duration: f32,
    delay: f32,
    elapsed: f32,
}

impl Tween {
    pub fn new(duration: f32, delay: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            duration: require_positive("duration", duration)?,
            delay: require_non_negative("delay", delay)?,
            elapsed: 0.0,
        })
    }

    pub fn advance(&mut self, dt_sec: f32) {
        if dt_sec > 0.0 && !self.is_finished() {
            self.elapsed += dt_sec;
        }
    }

    /// Linear time fraction in [0, 1], after the delay.
    pub fn linear(&self) -> f32 {
        ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn progress(&self) -> f32 {
        ease_out_cubic(self.linear())
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

/// Opacity plus a translation, applied as inline style by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Frame {
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px)", self.translate_x, self.translate_y)
    }
}

/// Fade plus slide that starts once and never reverses.
#[derive(Clone, Debug)]
pub struct Reveal {
    tween: Tween,
    offset_x: f32,
    offset_y: f32,
    started: bool,
}

impl Reveal {
    pub fn new(duration: f32, offset_x: f32, offset_y: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            tween: Tween::new(duration, 0.0)?,
            offset_x,
            offset_y,
            started: false,
        })
    }

    /// Hero block sliding in from the left, already started.
    pub fn entrance() -> Result<Self, ConfigError> {
        let mut reveal = Self::new(ENTRANCE_DURATION_SEC, ENTRANCE_OFFSET_X_PX, 0.0)?;
        reveal.observe(true);
        Ok(reveal)
    }

    /// Panel rising into place when first scrolled into view.
    pub fn on_scroll_into_view() -> Result<Self, ConfigError> {
        Self::new(REVEAL_DURATION_SEC, 0.0, REVEAL_OFFSET_Y_PX)
    }

    /// Latch on the first visible report; later reports are ignored.
    pub fn observe(&mut self, intersecting: bool) {
        if intersecting {
            self.started = true;
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.started && self.tween.is_finished()
    }

    pub fn tick(&mut self, dt_sec: f32) -> Frame {
        if self.started {
            self.tween.advance(dt_sec);
        }
        self.frame()
    }

    pub fn frame(&self) -> Frame {
        let p = if self.started { self.tween.progress() } else { 0.0 };
        Frame {
            opacity: p,
            translate_x: self.offset_x * (1.0 - p),
            translate_y: self.offset_y * (1.0 - p),
        }
    }
}

/// Horizontal offset of the marquee track, in percent of its own width.
///
/// Time is `f64` so the phase keeps its precision on pages left open for days.
#[inline]
pub fn marquee_offset_percent(elapsed_sec: f64) -> f32 {
    let phase = (elapsed_sec.max(0.0) / MARQUEE_PERIOD_SEC as f64).fract() as f32;
    MARQUEE_TRAVEL_PERCENT * phase
}

/// Height of equalizer bar `index`: min → max → min over one period.
/// Bar `i` starts `(i + 1) * EQ_STAGGER_SEC` after the loop.
#[inline]
pub fn equalizer_height(elapsed_sec: f64, index: usize) -> f32 {
    let local = elapsed_sec - (index + 1) as f64 * EQ_STAGGER_SEC as f64;
    if local <= 0.0 {
        return EQ_MIN_HEIGHT_PX;
    }
    let phase = (local / EQ_PERIOD_SEC as f64).fract() as f32;
    let tri = 1.0 - (2.0 * phase - 1.0).abs();
    EQ_MIN_HEIGHT_PX + (EQ_MAX_HEIGHT_PX - EQ_MIN_HEIGHT_PX) * tri
}
