use thiserror::Error;

/// Reasons a controller configuration is rejected at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("vertical clamp range is empty: min {min}° > max {max}°")]
    DegenerateClampRange { min: f32, max: f32 },
    #[error("`{0}` must be a finite number")]
    NotFinite(&'static str),
    #[error("`{field}` must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("ramp ceiling {ceiling} is below base speed {speed}")]
    CeilingBelowSpeed { ceiling: f32, speed: f32 },
    #[error("easing factor must lie in [0, 1] (got {0})")]
    EasingFactorOutOfRange(f32),
    #[error("parse error")]
    Serde(#[from] serde_json::Error),
}
