use crate::traits::{CaptureMode, CursorService, LookEdge};

/// Whether pointer motion currently steers the camera
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookMode {
    #[default]
    Idle,
    Looking,
}

/// Idle ⇄ Looking switch that owns the pointer capture
///
/// The cursor is hidden and locked on entering `Looking` and given back on
/// every way out: a released edge, [`release`](Self::release), or drop.
#[derive(Debug)]
pub struct LookToggle<C: CursorService> {
    mode: LookMode,
    cursor: C,
}

impl<C: CursorService> LookToggle<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            mode: LookMode::Idle,
            cursor,
        }
    }

    pub fn mode(&self) -> LookMode {
        self.mode
    }

    pub fn is_looking(&self) -> bool {
        self.mode == LookMode::Looking
    }

    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Feed this frame's edge; returns true when the mode changed
    ///
    /// A pressed edge while already looking, or a released edge while idle,
    /// is ignored.
    pub fn handle_edge(&mut self, edge: LookEdge) -> bool {
        match (self.mode, edge) {
            (LookMode::Idle, LookEdge::Pressed) => {
                self.engage();
                true
            }
            (LookMode::Looking, LookEdge::Released) => {
                self.release();
                true
            }
            _ => false,
        }
    }

    /// Force the toggle back to `Idle`, returning the pointer if it was held
    pub fn release(&mut self) {
        if self.mode == LookMode::Looking {
            self.cursor.set_capture_mode(CaptureMode::Free);
            self.cursor.set_visible(true);
            self.mode = LookMode::Idle;
            log::debug!("look released");
        }
    }

    fn engage(&mut self) {
        self.cursor.set_visible(false);
        self.cursor.set_capture_mode(CaptureMode::Locked);
        self.mode = LookMode::Looking;
        log::debug!("look engaged");
    }
}

impl<C: CursorService> Drop for LookToggle<C> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct CursorState {
        visible: bool,
        mode: CaptureMode,
    }

    #[derive(Debug, Clone)]
    struct SharedCursor(Rc<RefCell<CursorState>>);

    impl SharedCursor {
        fn new() -> (Self, Rc<RefCell<CursorState>>) {
            let state = Rc::new(RefCell::new(CursorState {
                visible: true,
                mode: CaptureMode::Free,
            }));
            (Self(state.clone()), state)
        }
    }

    impl CursorService for SharedCursor {
        fn set_visible(&mut self, visible: bool) {
            self.0.borrow_mut().visible = visible;
        }

        fn set_capture_mode(&mut self, mode: CaptureMode) {
            self.0.borrow_mut().mode = mode;
        }
    }

    #[test]
    fn starts_idle() {
        let (cursor, _) = SharedCursor::new();
        let toggle = LookToggle::new(cursor);
        assert_eq!(toggle.mode(), LookMode::Idle);
    }

    #[test]
    fn press_locks_and_hides() {
        let (cursor, state) = SharedCursor::new();
        let mut toggle = LookToggle::new(cursor);

        assert!(toggle.handle_edge(LookEdge::Pressed));
        assert!(toggle.is_looking());
        assert_eq!(
            *state.borrow(),
            CursorState {
                visible: false,
                mode: CaptureMode::Locked
            }
        );
    }

    #[test]
    fn repeated_press_does_not_reenter() {
        let (cursor, _) = SharedCursor::new();
        let mut toggle = LookToggle::new(cursor);

        assert!(toggle.handle_edge(LookEdge::Pressed));
        assert!(!toggle.handle_edge(LookEdge::Pressed));
        assert!(!toggle.handle_edge(LookEdge::None));
        assert!(toggle.is_looking());
    }

    #[test]
    fn release_while_idle_is_ignored() {
        let (cursor, _) = SharedCursor::new();
        let mut toggle = LookToggle::new(cursor);
        assert!(!toggle.handle_edge(LookEdge::Released));
        assert_eq!(toggle.mode(), LookMode::Idle);
    }

    #[test]
    fn drop_while_looking_returns_cursor() {
        let (cursor, state) = SharedCursor::new();
        {
            let mut toggle = LookToggle::new(cursor);
            toggle.handle_edge(LookEdge::Pressed);
            assert!(!state.borrow().visible);
        }
        assert!(state.borrow().visible);
        assert_eq!(state.borrow().mode, CaptureMode::Free);
    }
}
