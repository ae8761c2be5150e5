pub mod clock;
pub mod controller;
pub mod input_adapter;
pub mod look_toggle;
pub mod motion;
pub mod orientation;
pub mod scripted_input;
pub mod window;

pub use clock::FrameClock;
pub use controller::FlyCamera;
pub use input_adapter::WinitInput;
pub use look_toggle::{LookMode, LookToggle};
pub use motion::MotionIntegrator;
pub use orientation::OrientationSolver;
pub use scripted_input::ScriptedInput;
pub use window::{HeadlessCursor, WindowCursor};
