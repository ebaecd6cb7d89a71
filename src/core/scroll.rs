use super::error::ConfigError;
use super::spring::{Spring, SpringConfig};

/// Fraction of the document scrolled, in [0, 1].
///
/// Documents that do not scroll report 0.
#[inline]
pub fn scroll_progress(offset: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0) as f32
}

/// Raw scroll progress smoothed by a spring, exposed as a horizontal scale.
#[derive(Clone, Debug)]
pub struct ScrollIndicator {
    spring: Spring,
}

impl ScrollIndicator {
    pub fn new(config: SpringConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            spring: Spring::new(config, 0.0)?,
        })
    }

    /// Feed a new raw progress value; out-of-range input is clamped.
    pub fn on_scroll(&mut self, progress: f32) {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.spring.set_target(p);
    }

    /// Advance the smoothing and return the scale to apply.
    pub fn tick(&mut self, dt_sec: f32) -> f32 {
        self.spring.step(dt_sec);
        self.scale()
    }

    pub fn scale(&self) -> f32 {
        self.spring.value().clamp(0.0, 1.0)
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_at_rest()
    }
}
