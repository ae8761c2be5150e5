use glam::{Vec2, Vec3};

/// Edge of the look-enable button seen during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LookEdge {
    #[default]
    None,
    Pressed,
    Released,
}

/// Everything the controller reads from input in one frame
///
/// Axes are already resolved from whatever bindings the host uses.
/// `movement` is camera-local (`x` right, `y` up, `z` forward) while
/// `world_vertical` moves along world `+Y` regardless of where the camera
/// looks. `look` is a pointer delta: `+x` right, `+y` down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub movement: Vec3,
    pub look: Vec2,
    pub accelerate_held: bool,
    pub world_vertical: f32,
    pub scroll: f32,
    pub look_edge: LookEdge,
    pub roll_axis: f32,
    /// Reset-roll button was released this frame
    pub reset_roll: bool,
}

/// Source of per-frame input snapshots
pub trait InputProvider {
    /// Produce this frame's snapshot and clear any per-frame edges and deltas
    fn snapshot(&mut self) -> InputSnapshot;
}

impl<P: InputProvider + ?Sized> InputProvider for &mut P {
    fn snapshot(&mut self) -> InputSnapshot {
        (**self).snapshot()
    }
}
