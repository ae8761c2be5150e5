use glam::{Quat, Vec3};

use crate::camera::CameraPose;

/// Receiver of the controller's per-frame pose
pub trait PoseSink {
    /// Store the camera's world position and local rotation
    fn write_pose(&mut self, position: Vec3, rotation: Quat);
}

impl PoseSink for CameraPose {
    fn write_pose(&mut self, position: Vec3, rotation: Quat) {
        self.position = position;
        self.orientation = rotation;
    }
}
