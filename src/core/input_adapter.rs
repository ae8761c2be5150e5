use std::collections::HashSet;

use glam::{Vec2, Vec3};
use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::{InputProvider, InputSnapshot, LookEdge};

/// Pixel scroll deltas are converted to wheel lines at this rate
const PIXELS_PER_LINE: f32 = 40.0;

/// Button that enables mouse look while held
pub const LOOK_BUTTON: MouseButton = MouseButton::Right;

/// Key whose release levels the horizon
pub const RESET_ROLL_KEY: KeyCode = KeyCode::KeyR;

/// Adapter that turns winit events into per-frame [`InputSnapshot`]s
///
/// Held keys persist between frames. Pointer motion, scroll and button
/// edges accumulate until the next [`snapshot`](InputProvider::snapshot)
/// and are then cleared.
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    held_keys: HashSet<KeyCode>,
    look_delta: Vec2,
    scroll: f32,
    look_edge: LookEdge,
    reset_roll: bool,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a window event; unrelated events are ignored
    pub fn process_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.key_changed(code, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_button_changed(*button, *state == ElementState::Pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
                };
                self.add_scroll(lines);
            }
            WindowEvent::Focused(false) => self.held_keys.clear(),
            _ => {}
        }
    }

    /// Raw device motion keeps arriving while the pointer is locked
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.add_pointer_motion(delta.0 as f32, delta.1 as f32);
        }
    }

    pub fn key_changed(&mut self, code: KeyCode, pressed: bool) {
        if pressed {
            self.held_keys.insert(code);
        } else {
            self.held_keys.remove(&code);
            if code == RESET_ROLL_KEY {
                self.reset_roll = true;
            }
        }
    }

    /// Latest edge in a frame wins
    pub fn mouse_button_changed(&mut self, button: MouseButton, pressed: bool) {
        if button == LOOK_BUTTON {
            self.look_edge = if pressed {
                LookEdge::Pressed
            } else {
                LookEdge::Released
            };
        }
    }

    pub fn add_pointer_motion(&mut self, dx: f32, dy: f32) {
        self.look_delta += Vec2::new(dx, dy);
    }

    pub fn add_scroll(&mut self, lines: f32) {
        self.scroll += lines;
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held_keys.contains(&code)
    }

    fn axis(&self, positive: &[KeyCode], negative: &[KeyCode]) -> f32 {
        let pos = positive.iter().any(|k| self.is_held(*k));
        let neg = negative.iter().any(|k| self.is_held(*k));
        match (pos, neg) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

impl InputProvider for WinitInput {
    fn snapshot(&mut self) -> InputSnapshot {
        let movement = Vec3::new(
            self.axis(&[KeyCode::KeyD], &[KeyCode::KeyA]),
            0.0,
            self.axis(&[KeyCode::KeyW], &[KeyCode::KeyS]),
        );

        InputSnapshot {
            movement,
            look: std::mem::take(&mut self.look_delta),
            accelerate_held: self.is_held(KeyCode::ShiftLeft) || self.is_held(KeyCode::ShiftRight),
            world_vertical: self.axis(&[KeyCode::Space], &[KeyCode::ControlLeft, KeyCode::ControlRight]),
            scroll: std::mem::take(&mut self.scroll),
            look_edge: std::mem::take(&mut self.look_edge),
            roll_axis: self.axis(&[KeyCode::KeyQ], &[KeyCode::KeyE]),
            reset_roll: std::mem::take(&mut self.reset_roll),
        }
    }
}
