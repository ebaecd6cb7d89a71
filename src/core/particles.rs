use super::error::{require_non_negative, require_positive, ConfigError};
use glam::Vec2;
use rand::prelude::*;

// Defaults for the background star field.
pub const DEFAULT_PARTICLE_COUNT: usize = 200;
pub const DEFAULT_RADIUS_MAX: f32 = 1.5; // px
pub const DEFAULT_SPEED_MAX: f32 = 0.25; // px per frame, per axis
pub const DEFAULT_OPACITY_MIN: f32 = 0.1;
pub const DEFAULT_OPACITY_MAX: f32 = 0.8;
pub const DEFAULT_FLICKER: f32 = 0.05; // full width of the per-frame opacity jitter

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub radius_max: f32,
    pub speed_max: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    pub flicker: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            radius_max: DEFAULT_RADIUS_MAX,
            speed_max: DEFAULT_SPEED_MAX,
            opacity_min: DEFAULT_OPACITY_MIN,
            opacity_max: DEFAULT_OPACITY_MAX,
            flicker: DEFAULT_FLICKER,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("radius_max", self.radius_max)?;
        require_non_negative("speed_max", self.speed_max)?;
        require_non_negative("flicker", self.flicker)?;
        let (min, max) = (self.opacity_min, self.opacity_max);
        if !(min.is_finite() && max.is_finite() && 0.0 <= min && min <= max && max <= 1.0) {
            return Err(ConfigError::OpacityBand { min, max });
        }
        Ok(())
    }

    #[inline]
    pub fn clamp_opacity(&self, opacity: f32) -> f32 {
        opacity.clamp(self.opacity_min, self.opacity_max)
    }
}

/// Fixed-size set of drifting points that wrap around the viewport.
///
/// The field only computes state; drawing is done by the caller from
/// [`ParticleField::particles`].
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    config: FieldConfig,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, width: f32, height: f32, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..config.count)
            .map(|_| spawn(&config, bounds, &mut rng))
            .collect();
        Ok(Self {
            particles,
            bounds,
            config,
            rng,
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Change the wrap bounds. Positions are left as they are and get pulled
    /// back inside by the next [`step`](Self::step).
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.position += p.velocity;
            p.position.x = wrap_axis(p.position.x, bounds.x);
            p.position.y = wrap_axis(p.position.y, bounds.y);

            let jitter = (self.rng.gen::<f32>() - 0.5) * self.config.flicker;
            p.opacity = self.config.clamp_opacity(p.opacity + jitter);
        }
    }
}

fn spawn(config: &FieldConfig, bounds: Vec2, rng: &mut StdRng) -> Particle {
    let speed = config.speed_max;
    Particle {
        position: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
        velocity: Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * speed,
            (rng.gen::<f32>() - 0.5) * 2.0 * speed,
        ),
        radius: rng.gen::<f32>() * config.radius_max,
        opacity: config.clamp_opacity(rng.gen::<f32>()),
    }
}

/// Past the low edge jumps to the high edge and vice versa.
#[inline]
pub fn wrap_axis(v: f32, extent: f32) -> f32 {
    if v < 0.0 {
        extent
    } else if v > extent {
        0.0
    } else {
        v
    }
}
