use glam::{EulerRot, Quat, Vec2};

use crate::config::ControllerConfig;
use crate::math;

/// Degrees of rotation per unit of pointer delta at sensitivity 1
pub const LOOK_DEGREES_PER_UNIT: f32 = 0.1;

/// Look rotation kept as two halves so the pitch clamp never sees yaw or roll
///
/// `horizontal` accumulates yaw and roll, `vertical` accumulates pitch. The
/// camera rotation is always `horizontal * vertical`; composing the other
/// way round makes roll swing the camera around the pitched axis instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSolver {
    horizontal: Quat,
    vertical: Quat,
}

impl Default for OrientationSolver {
    fn default() -> Self {
        Self {
            horizontal: Quat::IDENTITY,
            vertical: Quat::IDENTITY,
        }
    }
}

impl OrientationSolver {
    /// Split an existing camera rotation into heading and pitch
    ///
    /// Any roll in `orientation` is discarded.
    pub fn from_orientation(orientation: Quat) -> Self {
        let (yaw, pitch, _roll) = orientation.normalize().to_euler(EulerRot::YXZ);
        Self {
            horizontal: Quat::from_rotation_y(yaw),
            vertical: Quat::from_rotation_x(pitch),
        }
    }

    pub fn horizontal(&self) -> Quat {
        self.horizontal
    }

    pub fn vertical(&self) -> Quat {
        self.vertical
    }

    /// Unsmoothed rotation the camera is heading for
    pub fn target(&self) -> Quat {
        math::renormalize(self.horizontal * self.vertical)
    }

    /// Apply one frame of look input and return the new local rotation
    ///
    /// `current` is the rotation the camera had last frame; it only matters
    /// when smoothing is on.
    pub fn rotate(
        &mut self,
        config: &ControllerConfig,
        look: Vec2,
        roll_axis: f32,
        reset_roll: bool,
        current: Quat,
        dt: f32,
    ) -> Quat {
        let scale = LOOK_DEGREES_PER_UNIT * config.look_sensitivity;
        let mut yaw = look.x * scale;
        let mut pitch = look.y * scale;
        let roll = roll_axis * config.roll_speed;

        if reset_roll {
            self.horizontal = math::strip_roll(self.horizontal);
            log::debug!("roll reset");
        }

        if config.smoothing {
            let limit = config.elasticity / 3.0;
            yaw = yaw.max(-limit).min(limit);
            pitch = pitch.max(-limit).min(limit);
        }

        // Pointer +x turns right, i.e. negative about +Y
        let turn = Quat::from_euler(EulerRot::YXZ, -yaw.to_radians(), 0.0, roll.to_radians());
        self.horizontal = math::renormalize(self.horizontal * turn);

        // Pointer +y looks down, i.e. negative about +X
        let tilt = Quat::from_rotation_x(-pitch.to_radians());
        self.vertical = math::renormalize(self.vertical * tilt);

        if config.clamp_vertical {
            self.vertical = math::clamp_pitch(
                self.vertical,
                config.min_vertical_angle,
                config.max_vertical_angle,
            );
        }

        let target = self.target();
        if config.smoothing {
            let t = config.elasticity * dt;
            if t >= 1.0 {
                target
            } else {
                math::renormalize(current.slerp(target, t))
            }
        } else {
            target
        }
    }
}
