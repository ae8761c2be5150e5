pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod math;
pub mod traits;

pub use camera::CameraPose;
pub use config::ControllerConfig;
pub use crate::core::{FlyCamera, LookMode};
pub use error::ConfigError;
