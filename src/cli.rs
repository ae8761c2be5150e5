// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "fly-camera")]
#[command(about = "Free-fly camera controller", long_about = None)]
pub struct Cli {
    /// JSON file with controller options; missing fields use defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run a scripted fly-through without opening a window
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Number of frames to simulate in headless mode
    #[arg(long, default_value_t = 240)]
    pub frames: usize,

    /// Fixed frame step in seconds for headless mode
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,
}

impl Cli {
    /// Headless frame step, rejected unless finite and positive
    pub fn frame_dt(&self) -> Result<f32> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            bail!("--dt must be a finite number of seconds above zero (got {})", self.dt);
        }
        Ok(self.dt)
    }
}
