use glam::Quat;

/// Quaternions shorter than this are treated as degenerate
const DEGENERATE_LENGTH: f32 = 1e-6;

/// Renormalize a quaternion, falling back to identity when it collapsed to zero
pub fn renormalize(q: Quat) -> Quat {
    let length = q.length();
    if length < DEGENERATE_LENGTH || !length.is_finite() {
        Quat::IDENTITY
    } else {
        q / length
    }
}

/// Flip into the hemisphere with `w >= 0`
///
/// `q` and `-q` describe the same rotation; the pitch conversion below
/// only works on the positive one.
pub fn canonical(q: Quat) -> Quat {
    if q.w < 0.0 {
        -q
    } else {
        q
    }
}

/// Angle in degrees of a pure-pitch quaternion, measured about `+X`
///
/// Undefined as `w` approaches zero (a ±180° pitch). Pitch never gets
/// there in practice, so no attempt is made to handle it.
pub fn pitch_degrees(q: Quat) -> f32 {
    let q = canonical(q);
    (2.0 * (q.x / q.w).atan()).to_degrees()
}

/// Clamp a pure-pitch quaternion to `[min_degrees, max_degrees]`
///
/// Works in the `w = 1` scaled form: `x` becomes `tan(angle / 2)` and the
/// result is renormalized. Same ±180° limitation as [`pitch_degrees`].
pub fn clamp_pitch(q: Quat, min_degrees: f32, max_degrees: f32) -> Quat {
    let q = canonical(q);
    let (y, z) = (q.y / q.w, q.z / q.w);

    let angle = (2.0 * (q.x / q.w).atan()).to_degrees();
    let clamped = angle.max(min_degrees).min(max_degrees);
    let x = (0.5 * clamped.to_radians()).tan();

    renormalize(Quat::from_xyzw(x, y, z, 1.0))
}

/// Drop the roll and tilt components, leaving a pure rotation about `+Y`
pub fn strip_roll(q: Quat) -> Quat {
    renormalize(Quat::from_xyzw(0.0, q.y, 0.0, q.w))
}
