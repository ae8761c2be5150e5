use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables for a [`FlyCamera`](crate::core::controller::FlyCamera)
///
/// Angles are in degrees. Every field has a default, so a JSON file only
/// needs to name the options it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Base movement speed in units per second
    pub speed: f32,
    /// Speed multiplier while the accelerate button is held
    pub sprint_multiplier: f32,
    /// Scroll-wheel dolly strength, relative to `speed`
    pub scroll_sensitivity: f32,
    /// Multiplier on pointer deltas before they become yaw/pitch degrees
    pub look_sensitivity: f32,

    pub easing: bool,
    /// Fraction of the gap to the requested velocity closed per tick
    pub easing_factor: f32,

    pub acceleration: bool,
    /// Relative speed growth per second while moving
    pub acceleration_rate: f32,
    /// Ceiling for the ramped speed; `None` lets it grow without bound
    pub max_ramped_speed: Option<f32>,

    pub clamp_vertical: bool,
    pub min_vertical_angle: f32,
    pub max_vertical_angle: f32,

    pub smoothing: bool,
    /// Catch-up rate of the smoothed rotation, per second
    pub elasticity: f32,

    /// Roll in degrees per unit of roll axis per tick
    pub roll_speed: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            speed: 10.0,
            sprint_multiplier: 3.0,
            scroll_sensitivity: 10.0,
            look_sensitivity: 1.0,
            easing: false,
            easing_factor: 0.1,
            acceleration: false,
            acceleration_rate: 0.5,
            max_ramped_speed: None,
            clamp_vertical: true,
            min_vertical_angle: -90.0,
            max_vertical_angle: 90.0,
            smoothing: false,
            elasticity: 10.0,
            roll_speed: 1.0,
        }
    }
}

impl ControllerConfig {
    /// Parse a JSON document and validate the result
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the controller cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("speed", self.speed),
            ("sprint_multiplier", self.sprint_multiplier),
            ("scroll_sensitivity", self.scroll_sensitivity),
            ("look_sensitivity", self.look_sensitivity),
            ("easing_factor", self.easing_factor),
            ("acceleration_rate", self.acceleration_rate),
            ("min_vertical_angle", self.min_vertical_angle),
            ("max_vertical_angle", self.max_vertical_angle),
            ("elasticity", self.elasticity),
            ("roll_speed", self.roll_speed),
        ];
        if let Some((field, _)) = finite.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NotFinite(field));
        }

        positive("speed", self.speed)?;
        positive("sprint_multiplier", self.sprint_multiplier)?;

        if !(0.0..=1.0).contains(&self.easing_factor) {
            return Err(ConfigError::EasingFactorOutOfRange(self.easing_factor));
        }

        if let Some(ceiling) = self.max_ramped_speed {
            if !ceiling.is_finite() {
                return Err(ConfigError::NotFinite("max_ramped_speed"));
            }
            positive("max_ramped_speed", ceiling)?;
            if ceiling < self.speed {
                return Err(ConfigError::CeilingBelowSpeed {
                    ceiling,
                    speed: self.speed,
                });
            }
        }

        if self.min_vertical_angle > self.max_vertical_angle {
            return Err(ConfigError::DegenerateClampRange {
                min: self.min_vertical_angle,
                max: self.max_vertical_angle,
            });
        }

        if self.smoothing {
            positive("elasticity", self.elasticity)?;
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
