//! Angle helpers for callers that normalize yaw upstream.

/// Wraps an angle in degrees to the range [0, 360).
///
/// The correction function deliberately does not wrap its input; callers
/// that want one-turn semantics for out-of-range yaw apply this first.
pub fn wrap_deg(angle_deg: f32) -> f32 {
    let wrapped = angle_deg.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
