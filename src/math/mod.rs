mod quat;

pub use quat::{canonical, clamp_pitch, pitch_degrees, renormalize, strip_roll};
