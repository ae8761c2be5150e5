use glam::{Quat, Vec3};

/// Camera-local forward axis (right-handed, Y-up, looking down -Z)
pub const LOCAL_FORWARD: Vec3 = Vec3::NEG_Z;
pub const LOCAL_RIGHT: Vec3 = Vec3::X;
pub const LOCAL_UP: Vec3 = Vec3::Y;

/// World position and orientation written by the controller every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl CameraPose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation: orientation.normalize(),
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * LOCAL_FORWARD
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * LOCAL_RIGHT
    }

    pub fn up(&self) -> Vec3 {
        self.orientation * LOCAL_UP
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}
