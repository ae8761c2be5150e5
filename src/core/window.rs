use std::sync::Arc;

use winit::window::{CursorGrabMode, Window};

use crate::traits::{CaptureMode, CursorService};

/// Cursor service backed by a winit window
#[derive(Debug, Clone)]
pub struct WindowCursor {
    window: Arc<Window>,
}

impl WindowCursor {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl CursorService for WindowCursor {
    fn set_visible(&mut self, visible: bool) {
        self.window.set_cursor_visible(visible);
    }

    fn set_capture_mode(&mut self, mode: CaptureMode) {
        match mode {
            CaptureMode::Locked => {
                // Not every platform can lock; confining is the next best thing
                let grabbed = self
                    .window
                    .set_cursor_grab(CursorGrabMode::Locked)
                    .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
                if let Err(e) = grabbed {
                    log::warn!("pointer capture unavailable: {e}");
                }
            }
            CaptureMode::Free => {
                if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
                    log::warn!("failed to release pointer: {e}");
                }
            }
        }
    }
}

/// Cursor service for runs without a window; only remembers what it was told
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessCursor {
    visible: bool,
    mode: CaptureMode,
}

impl HeadlessCursor {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn capture_mode(&self) -> CaptureMode {
        self.mode
    }
}

impl Default for HeadlessCursor {
    fn default() -> Self {
        Self {
            visible: true,
            mode: CaptureMode::Free,
        }
    }
}

impl CursorService for HeadlessCursor {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_capture_mode(&mut self, mode: CaptureMode) {
        self.mode = mode;
    }
}
