use glam::{Quat, Vec3};

use super::look_toggle::{LookMode, LookToggle};
use super::motion::MotionIntegrator;
use super::orientation::OrientationSolver;
use crate::camera::CameraPose;
use crate::config::ControllerConfig;
use crate::error::ConfigError;
use crate::traits::{CursorService, InputProvider, InputSnapshot, PoseSink};

/// Free-fly camera controller driven once per frame by the host
///
/// Lifecycle: [`init`](Self::init) → [`on_activate`](Self::on_activate) →
/// [`tick`](Self::tick) every frame → [`on_deactivate`](Self::on_deactivate).
/// Ticks while inactive leave the pose untouched. Dropping the controller
/// releases the pointer if it is still captured.
#[derive(Debug)]
pub struct FlyCamera<C: CursorService> {
    config: ControllerConfig,
    pose: CameraPose,
    motion: MotionIntegrator,
    orientation: OrientationSolver,
    look: LookToggle<C>,
    active: bool,
}

impl<C: CursorService> FlyCamera<C> {
    /// Validate `config` and build an inactive controller at the origin
    pub fn init(config: ControllerConfig, cursor: C) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            motion: MotionIntegrator::new(config.speed),
            orientation: OrientationSolver::default(),
            pose: CameraPose::default(),
            look: LookToggle::new(cursor),
            active: false,
            config,
        })
    }

    /// Start from a given pose instead of the origin
    pub fn with_pose(mut self, position: Vec3, orientation: Quat) -> Self {
        self.orientation = OrientationSolver::from_orientation(orientation);
        self.pose = CameraPose::new(position, self.orientation.target());
        self
    }

    pub fn on_activate(&mut self) {
        if !self.active {
            self.active = true;
            log::debug!("fly camera activated at {:?}", self.pose.position);
        }
    }

    /// Stop reacting to input and hand the pointer back
    pub fn on_deactivate(&mut self) {
        self.look.release();
        self.motion.reset(self.config.speed);
        if self.active {
            self.active = false;
            log::debug!("fly camera deactivated at {:?}", self.pose.position);
        }
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) -> CameraPose {
        if !self.active {
            return self.pose;
        }

        self.pose.position += self.motion.advance(
            &self.config,
            input.movement,
            input.world_vertical,
            input.accelerate_held,
            input.scroll,
            self.pose.orientation,
            dt,
        );

        self.look.handle_edge(input.look_edge);
        if self.look.is_looking() {
            self.pose.orientation = self.orientation.rotate(
                &self.config,
                input.look,
                input.roll_axis,
                input.reset_roll,
                self.pose.orientation,
                dt,
            );
        }

        log::trace!(
            "pose {:?} {:?}",
            self.pose.position,
            self.pose.orientation
        );
        self.pose
    }

    /// Pull a snapshot from `input`, tick, and write the result into `sink`
    pub fn drive<I, S>(&mut self, input: &mut I, sink: &mut S, dt: f32) -> CameraPose
    where
        I: InputProvider + ?Sized,
        S: PoseSink + ?Sized,
    {
        let snapshot = input.snapshot();
        let pose = self.tick(&snapshot, dt);
        sink.write_pose(pose.position, pose.orientation);
        pose
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Options may be tweaked between frames; they are not re-validated
    pub fn config_mut(&mut self) -> &mut ControllerConfig {
        &mut self.config
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn look_mode(&self) -> LookMode {
        self.look.mode()
    }

    pub fn orientation_solver(&self) -> &OrientationSolver {
        &self.orientation
    }

    pub fn motion(&self) -> &MotionIntegrator {
        &self.motion
    }

    pub fn cursor(&self) -> &C {
        self.look.cursor()
    }
}
