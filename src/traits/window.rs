/// How the pointer is bound to the window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptureMode {
    #[default]
    Free,
    Locked,
}

/// Cursor visibility and pointer capture, as exposed by the host window
pub trait CursorService {
    /// Set cursor visibility
    fn set_visible(&mut self, visible: bool);

    /// Lock the pointer to the window or release it
    fn set_capture_mode(&mut self, mode: CaptureMode);
}

impl<C: CursorService + ?Sized> CursorService for &mut C {
    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible);
    }

    fn set_capture_mode(&mut self, mode: CaptureMode) {
        (**self).set_capture_mode(mode);
    }
}
