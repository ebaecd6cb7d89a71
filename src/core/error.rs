use thiserror::Error;

/// Rejected tuning values for the pure animation models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("opacity band [{min}, {max}] is empty or outside [0, 1]")]
    OpacityBand { min: f32, max: f32 },
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be non-negative and finite, got {value}")]
    Negative { name: &'static str, value: f32 },
}

pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

pub(crate) fn require_non_negative(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Negative { name, value })
    }
}
