use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use glam::{Quat, Vec2, Vec3};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use fly_camera::cli::Cli;
use fly_camera::core::{FlyCamera, FrameClock, HeadlessCursor, ScriptedInput, WindowCursor, WinitInput};
use fly_camera::traits::{InputProvider, InputSnapshot, LookEdge};
use fly_camera::{CameraPose, ControllerConfig};

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const TITLE_UPDATE_INTERVAL: f32 = 0.25;
const START_POSITION: Vec3 = Vec3::new(0.0, 2.0, 10.0);

fn load_config(path: Option<&Path>) -> Result<ControllerConfig> {
    let Some(path) = path else {
        return Ok(ControllerConfig::default());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = ControllerConfig::from_json_str(&json)
        .with_context(|| format!("invalid config {}", path.display()))?;
    log::info!("loaded controller config from {}", path.display());
    Ok(config)
}

// === Headless ===

/// Look around, fly forward with a sprint, climb, then dolly back
fn fly_through(frames: usize) -> ScriptedInput {
    let quarter = (frames / 4).max(1);
    let look = InputSnapshot {
        look: Vec2::new(4.0, 1.0),
        ..Default::default()
    };
    let forward = InputSnapshot {
        movement: Vec3::Z,
        accelerate_held: true,
        ..Default::default()
    };
    let climb = InputSnapshot {
        world_vertical: 1.0,
        roll_axis: 0.5,
        ..Default::default()
    };
    let dolly = InputSnapshot {
        scroll: -1.0,
        reset_roll: true,
        ..Default::default()
    };

    ScriptedInput::new([InputSnapshot {
        look_edge: LookEdge::Pressed,
        ..Default::default()
    }])
    .repeat(look, quarter)
    .repeat(forward, quarter)
    .repeat(climb, quarter)
    .then(dolly)
    .then(InputSnapshot {
        look_edge: LookEdge::Released,
        ..Default::default()
    })
}

fn run_headless(config: ControllerConfig, frames: usize, dt: f32) -> Result<()> {
    let mut camera = FlyCamera::init(config, HeadlessCursor::default())?
        .with_pose(START_POSITION, Quat::IDENTITY);
    let mut input = fly_through(frames);
    let mut pose = CameraPose::default();

    camera.on_activate();
    for _ in 0..frames {
        camera.drive(&mut input, &mut pose, dt);
    }
    camera.on_deactivate();

    let forward = pose.forward();
    println!(
        "position ({:.3}, {:.3}, {:.3})  forward ({:.3}, {:.3}, {:.3})",
        pose.position.x, pose.position.y, pose.position.z, forward.x, forward.y, forward.z
    );
    Ok(())
}

// === Windowed ===

struct App {
    config: ControllerConfig,
    window: Option<Arc<Window>>,
    camera: Option<FlyCamera<WindowCursor>>,
    input: WinitInput,
    clock: FrameClock,
    title_timer: f32,
}

impl App {
    fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            window: None,
            camera: None,
            input: WinitInput::new(),
            clock: FrameClock::new(),
            title_timer: 0.0,
        }
    }

    fn update_title(&mut self, pose: CameraPose, dt: f32) {
        self.title_timer += dt;
        if self.title_timer < TITLE_UPDATE_INTERVAL {
            return;
        }
        self.title_timer = 0.0;

        if let Some(window) = &self.window {
            let p = pose.position;
            window.set_title(&format!("Fly Camera - ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z));
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(camera) = &mut self.camera {
            camera.on_deactivate();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Fly Camera")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let camera = match FlyCamera::init(self.config.clone(), WindowCursor::new(window.clone())) {
            Ok(camera) => camera.with_pose(START_POSITION, Quat::IDENTITY),
            Err(e) => {
                log::error!("Failed to start camera: {e}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.camera = Some(camera);
        if let Some(camera) = &mut self.camera {
            camera.on_activate();
        }
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.shutdown(event_loop),
            WindowEvent::Focused(focused) => {
                self.input.process_window_event(&event);
                if let Some(camera) = &mut self.camera {
                    if focused {
                        camera.on_activate();
                        self.clock.reset();
                    } else {
                        camera.on_deactivate();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let dt = self.clock.tick();
                let snapshot = self.input.snapshot();
                if let Some(camera) = &mut self.camera {
                    let pose = camera.tick(&snapshot, dt);
                    self.update_title(pose, dt);
                }
            }
            other => self.input.process_window_event(&other),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.input.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run_windowed(config: ControllerConfig) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    println!("Fly Camera - Controls: WASD move, Space/Ctrl up/down, Shift sprint, hold right mouse to look, Q/E roll, R level, wheel dolly, Escape to quit");
    event_loop.run_app(&mut app)?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    if cli.headless {
        run_headless(config, cli.frames, cli.frame_dt()?)
    } else {
        run_windowed(config)
    }
}
