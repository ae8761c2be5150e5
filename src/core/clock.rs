use std::time::Instant;

/// Longest frame step handed to the controller, in seconds
///
/// A stalled frame (window drag, breakpoint) would otherwise teleport the
/// camera on the next tick.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Wall-clock frame timer for the windowed driver
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_tick: start,
            frames: 0,
        }
    }

    /// Seconds since the previous tick, capped at [`MAX_FRAME_DT`]
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.frames += 1;
        delta.min(MAX_FRAME_DT)
    }

    /// Restart timing without counting a frame, e.g. after regaining focus
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
