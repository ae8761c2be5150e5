use glam::{Quat, Vec3};

use crate::camera::LOCAL_FORWARD;
use crate::config::ControllerConfig;

/// World-space unit direction the user asks to move in
///
/// `local` is rotated by the camera orientation first; the world vertical
/// axis is added afterwards so it stays aligned with `+Y`. A zero request
/// stays zero.
pub fn wish_direction(orientation: Quat, local: Vec3, world_vertical: f32) -> Vec3 {
    let local = Vec3::new(local.x, local.y, -local.z);
    (orientation * local + Vec3::Y * world_vertical).normalize_or_zero()
}

/// Turns movement requests into per-tick position deltas
///
/// With easing enabled the filter blends by a fixed fraction per call, so
/// the time it takes to reach full speed depends on the frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionIntegrator {
    last_applied_velocity: Vec3,
    ramped_speed: f32,
}

impl MotionIntegrator {
    pub fn new(base_speed: f32) -> Self {
        Self {
            last_applied_velocity: Vec3::ZERO,
            ramped_speed: base_speed,
        }
    }

    /// Previous output of the easing filter
    pub fn last_applied_velocity(&self) -> Vec3 {
        self.last_applied_velocity
    }

    /// Current acceleration ramp speed (only meaningful with acceleration)
    pub fn ramped_speed(&self) -> f32 {
        self.ramped_speed
    }

    /// Forget easing history and ramp progress
    pub fn reset(&mut self, base_speed: f32) {
        self.last_applied_velocity = Vec3::ZERO;
        self.ramped_speed = base_speed;
    }

    /// Position delta for this tick
    #[allow(clippy::too_many_arguments)]
    pub fn advance(
        &mut self,
        config: &ControllerConfig,
        wish_local: Vec3,
        world_vertical: f32,
        fast_held: bool,
        scroll: f32,
        orientation: Quat,
        dt: f32,
    ) -> Vec3 {
        let direction = wish_direction(orientation, wish_local, world_vertical);
        let speed = self.resolve_speed(config, direction != Vec3::ZERO, fast_held, dt);

        let wish_velocity = direction * speed;

        let mut delta = if config.easing {
            let eased = self
                .last_applied_velocity
                .lerp(wish_velocity * dt, config.easing_factor);
            self.last_applied_velocity = eased;
            eased
        } else {
            wish_velocity * dt
        };

        // Scroll dollies along the view direction
        let forward = orientation * LOCAL_FORWARD;
        delta += forward * scroll * speed * config.scroll_sensitivity * dt;

        delta
    }

    fn resolve_speed(
        &mut self,
        config: &ControllerConfig,
        moving: bool,
        fast_held: bool,
        dt: f32,
    ) -> f32 {
        let multiplier = if fast_held { config.sprint_multiplier } else { 1.0 };

        if !moving {
            self.ramped_speed = config.speed;
            return config.speed * multiplier;
        }

        if !config.acceleration {
            return config.speed * multiplier;
        }

        self.ramped_speed *= 1.0 + config.acceleration_rate * dt;
        if let Some(ceiling) = config.max_ramped_speed {
            // A ceiling under base speed (set via config_mut) never pulls the ramp down
            self.ramped_speed = self.ramped_speed.min(ceiling.max(config.speed));
        }
        self.ramped_speed * multiplier
    }
}
