use super::error::{require_positive, ConfigError};

// Scroll bar smoothing defaults (damping ratio 1.5, overdamped).
pub const DEFAULT_STIFFNESS: f32 = 100.0;
pub const DEFAULT_DAMPING: f32 = 30.0;
pub const DEFAULT_MASS: f32 = 1.0;
pub const DEFAULT_REST_DELTA: f32 = 0.001;
pub const DEFAULT_REST_SPEED: f32 = 0.01;

// Damping ratios this close to 1 use the critically damped solution.
const CRITICAL_EPSILON: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            mass: DEFAULT_MASS,
            rest_delta: DEFAULT_REST_DELTA,
            rest_speed: DEFAULT_REST_SPEED,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("stiffness", self.stiffness)?;
        require_positive("damping", self.damping)?;
        require_positive("mass", self.mass)?;
        require_positive("rest_delta", self.rest_delta)?;
        require_positive("rest_speed", self.rest_speed)?;
        Ok(())
    }

    #[inline]
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    #[inline]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Damped spring following a moving target.
///
/// Each [`step`](Spring::step) solves the spring equation in closed form from
/// the current displacement and velocity, so large frame gaps do not blow up
/// the way explicit integration would.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    at_rest: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            at_rest: true,
        })
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    pub fn set_target(&mut self, target: f32) {
        if target != self.target {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Jump to `value` with no motion.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Advance by `dt_sec` and return the new value.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if self.at_rest || !(dt_sec > 0.0) {
            return self.value;
        }
        let (x, v) = solve(&self.config, self.value - self.target, self.velocity, dt_sec);
        self.value = self.target + x;
        self.velocity = v;
        if x.abs() < self.config.rest_delta && v.abs() < self.config.rest_speed {
            self.snap_to(self.target);
        }
        self.value
    }
}

/// Displacement and velocity after `t` seconds, starting from `x0`, `v0`.
fn solve(config: &SpringConfig, x0: f32, v0: f32, t: f32) -> (f32, f32) {
    let omega = config.natural_frequency();
    let zeta = config.damping_ratio();

    if (zeta - 1.0).abs() < CRITICAL_EPSILON {
        let e = (-omega * t).exp();
        let b = v0 + omega * x0;
        let x = e * (x0 + b * t);
        let v = e * (b - omega * (x0 + b * t));
        (x, v)
    } else if zeta < 1.0 {
        let wd = omega * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * omega * t).exp();
        let c = (v0 + zeta * omega * x0) / wd;
        let (sin, cos) = (wd * t).sin_cos();
        let x = e * (x0 * cos + c * sin);
        let v = e * (-zeta * omega * (x0 * cos + c * sin) + wd * (c * cos - x0 * sin));
        (x, v)
    } else {
        let wh = omega * (zeta * zeta - 1.0).sqrt();
        let r1 = -zeta * omega + wh;
        let r2 = -zeta * omega - wh;
        let a = (v0 - r2 * x0) / (r1 - r2);
        let b = x0 - a;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (a * e1 + b * e2, a * r1 * e1 + b * r2 * e2)
    }
}
