use std::cell::RefCell;
use std::rc::Rc;

use glam::{Quat, Vec2, Vec3};
use fly_camera::core::ScriptedInput;
use fly_camera::traits::{CaptureMode, CursorService, InputSnapshot, LookEdge};
use fly_camera::{CameraPose, ControllerConfig, FlyCamera, LookMode};

/// Cursor state visible from outside the controller
#[derive(Debug, Clone, Copy, PartialEq)]
struct CursorLog {
    visible: bool,
    mode: CaptureMode,
    changes: usize,
}

/// Mock cursor service sharing its log with the test
#[derive(Debug, Clone)]
struct MockCursor(Rc<RefCell<CursorLog>>);

impl MockCursor {
    fn new() -> (Self, Rc<RefCell<CursorLog>>) {
        let log = Rc::new(RefCell::new(CursorLog {
            visible: true,
            mode: CaptureMode::Free,
            changes: 0,
        }));
        (Self(log.clone()), log)
    }
}

impl CursorService for MockCursor {
    fn set_visible(&mut self, visible: bool) {
        let mut log = self.0.borrow_mut();
        log.visible = visible;
        log.changes += 1;
    }

    fn set_capture_mode(&mut self, mode: CaptureMode) {
        let mut log = self.0.borrow_mut();
        log.mode = mode;
        log.changes += 1;
    }
}

fn edge(look_edge: LookEdge) -> InputSnapshot {
    InputSnapshot {
        look_edge,
        ..Default::default()
    }
}

fn active_camera(config: ControllerConfig) -> (FlyCamera<MockCursor>, Rc<RefCell<CursorLog>>) {
    let (cursor, log) = MockCursor::new();
    let mut camera = FlyCamera::init(config, cursor).unwrap();
    camera.on_activate();
    (camera, log)
}

#[cfg(test)]
mod look_toggle_tests {
    use super::*;

    #[test]
    fn test_edges_strictly_alternate_modes() {
        let (mut camera, log) = active_camera(ControllerConfig::default());

        let edges = [
            LookEdge::Pressed,
            LookEdge::None,
            LookEdge::Pressed,
            LookEdge::Released,
            LookEdge::Released,
            LookEdge::Pressed,
            LookEdge::Released,
        ];
        let expected = [
            LookMode::Looking,
            LookMode::Looking,
            LookMode::Looking,
            LookMode::Idle,
            LookMode::Idle,
            LookMode::Looking,
            LookMode::Idle,
        ];

        let mut transitions = Vec::new();
        let mut previous = camera.look_mode();
        for (edge_kind, want) in edges.into_iter().zip(expected) {
            camera.tick(&edge(edge_kind), 0.016);
            let mode = camera.look_mode();
            assert_eq!(mode, want);

            // Cursor is visible exactly when not looking
            assert_eq!(log.borrow().visible, mode != LookMode::Looking);

            if mode != previous {
                transitions.push(mode);
            }
            previous = mode;
        }

        assert_eq!(
            transitions,
            vec![LookMode::Looking, LookMode::Idle, LookMode::Looking, LookMode::Idle]
        );
    }

    #[test]
    fn test_looking_locks_pointer() {
        let (mut camera, log) = active_camera(ControllerConfig::default());

        camera.tick(&edge(LookEdge::Pressed), 0.016);

        let state = *log.borrow();
        assert!(!state.visible);
        assert_eq!(state.mode, CaptureMode::Locked);
    }

    #[test]
    fn test_deactivate_while_looking_frees_cursor() {
        let (mut camera, log) = active_camera(ControllerConfig::default());
        camera.tick(&edge(LookEdge::Pressed), 0.016);

        camera.on_deactivate();

        let state = *log.borrow();
        assert!(state.visible);
        assert_eq!(state.mode, CaptureMode::Free);
        assert_eq!(camera.look_mode(), LookMode::Idle);
        assert!(!camera.is_active());
    }

    #[test]
    fn test_deactivate_while_idle_leaves_cursor_alone() {
        let (mut camera, log) = active_camera(ControllerConfig::default());

        camera.on_deactivate();

        assert_eq!(log.borrow().changes, 0);
    }

    #[test]
    fn test_drop_while_looking_frees_cursor() {
        let (mut camera, log) = active_camera(ControllerConfig::default());
        camera.tick(&edge(LookEdge::Pressed), 0.016);
        assert!(!log.borrow().visible);

        drop(camera);

        let state = *log.borrow();
        assert!(state.visible);
        assert_eq!(state.mode, CaptureMode::Free);
    }

    #[test]
    fn test_look_only_rotates_while_looking() {
        let (mut camera, _log) = active_camera(ControllerConfig::default());
        let look = InputSnapshot {
            look: Vec2::new(50.0, 0.0),
            ..Default::default()
        };

        camera.tick(&look, 0.016);
        assert_eq!(camera.pose().orientation, Quat::IDENTITY);

        camera.tick(&edge(LookEdge::Pressed), 0.016);
        camera.tick(&look, 0.016);
        let turned = camera.pose().orientation;
        assert!(turned.angle_between(Quat::IDENTITY) > 1e-3);

        camera.tick(&edge(LookEdge::Released), 0.016);
        camera.tick(&look, 0.016);
        assert_eq!(camera.pose().orientation, turned);
    }
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_reactivation_after_deactivate() {
        let (mut camera, log) = active_camera(ControllerConfig::default());
        camera.tick(&edge(LookEdge::Pressed), 0.016);
        camera.on_deactivate();

        camera.on_activate();
        camera.tick(&edge(LookEdge::Pressed), 0.016);

        assert_eq!(camera.look_mode(), LookMode::Looking);
        assert!(!log.borrow().visible);
    }

    #[test]
    fn test_scripted_flight_moves_along_view() {
        let (mut camera, _log) = active_camera(ControllerConfig {
            speed: 2.0,
            ..Default::default()
        });
        let forward = InputSnapshot {
            movement: Vec3::Z,
            ..Default::default()
        };
        let mut input = ScriptedInput::default().repeat(forward, 10);
        let mut sink = CameraPose::default();

        for _ in 0..10 {
            camera.drive(&mut input, &mut sink, 0.1);
        }

        assert!(sink.position.distance(Vec3::new(0.0, 0.0, -2.0)) < 1e-5);
        assert!(input.is_finished());
    }

    #[test]
    fn test_config_change_between_frames_takes_effect() {
        let (mut camera, _log) = active_camera(ControllerConfig::default());
        let strafe = InputSnapshot {
            movement: Vec3::X,
            ..Default::default()
        };

        camera.config_mut().speed = 1.0;
        let before = camera.tick(&strafe, 1.0).position;
        camera.config_mut().speed = 3.0;
        let after = camera.tick(&strafe, 1.0).position;

        assert!((before.x - 1.0).abs() < 1e-5);
        assert!((after.x - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_misconfigured_controller_refuses_to_start() {
        let (cursor, log) = MockCursor::new();
        let config = ControllerConfig {
            min_vertical_angle: 30.0,
            max_vertical_angle: 10.0,
            ..Default::default()
        };

        let err = FlyCamera::init(config, cursor).unwrap_err();
        assert!(err.to_string().contains("clamp range"));
        assert_eq!(log.borrow().changes, 0);
    }
}
