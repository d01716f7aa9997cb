//! Yaw correction for the equirectangular projection.

use std::f32::consts::{FRAC_PI_2, TAU};

/// Horizontal compression ratio of the projection at the equator (√3/2).
///
/// Fixed by the calibration of the source video pipeline; not configurable.
pub const EQUATOR_COMPRESSION: f32 = 0.866_025;

/// Angular region of a yaw angle, classified in radians without wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// First quadrant, `0 <= theta < PI/2`.
    Forward,
    /// Last quadrant before a full turn, `3*PI/2 < theta < 2*PI`.
    Wraparound,
    /// Everything else, including the closed band `[PI/2, 3*PI/2]`,
    /// negative angles, and angles at or beyond one full turn.
    Rear,
}

impl Region {
    /// Classifies an angle in radians.
    ///
    /// The input is taken as-is: angles outside `[0, 2*PI)` are not wrapped
    /// first and land in [`Region::Rear`].
    pub fn classify(theta_rad: f32) -> Self {
        if (0.0..FRAC_PI_2).contains(&theta_rad) {
            Region::Forward
        } else if theta_rad > 3.0 * FRAC_PI_2 && theta_rad < TAU {
            Region::Wraparound
        } else {
            Region::Rear
        }
    }
}

/// Maps a raw viewer yaw angle in degrees to the corrected yaw angle, in
/// degrees, expected by the renderer's camera control.
///
/// The forward and wraparound quadrants are compressed by the arctangent of
/// a scaled tangent; the rear hemisphere collapses to `0`. Inputs are not
/// wrapped into one turn, so negative angles and angles of 360° or more also
/// yield `0` (callers that want wrapping apply
/// [`wrap_deg`](crate::util::math::wrap_deg) first).
///
/// Pure and deterministic: identical inputs produce bit-identical outputs.
pub fn correct_yaw(yaw_deg: f32) -> f32 {
    let theta = yaw_deg.to_radians();
    match Region::classify(theta) {
        Region::Forward => (EQUATOR_COMPRESSION * theta.tan()).atan().to_degrees(),
        Region::Wraparound => 360.0 - (-EQUATOR_COMPRESSION * theta.tan()).atan().to_degrees(),
        Region::Rear => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::{correct_yaw, Region, EQUATOR_COMPRESSION};
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn classify_covers_quadrant_boundaries() {
        assert_eq!(Region::classify(0.0), Region::Forward);
        assert_eq!(Region::classify(1.0), Region::Forward);
        assert_eq!(Region::classify(FRAC_PI_2), Region::Rear);
        assert_eq!(Region::classify(PI), Region::Rear);
        assert_eq!(Region::classify(3.0 * FRAC_PI_2), Region::Rear);
        assert_eq!(Region::classify(5.0), Region::Wraparound);
        assert_eq!(Region::classify(TAU), Region::Rear);
        assert_eq!(Region::classify(-0.1), Region::Rear);
    }

    #[test]
    fn forward_zero_maps_to_zero() {
        assert_eq!(correct_yaw(0.0), 0.0);
    }

    #[test]
    fn forward_quadrant_compresses_45_degrees() {
        let expected = EQUATOR_COMPRESSION.atan().to_degrees();
        assert!((correct_yaw(45.0) - expected).abs() < 1e-4);
        assert!((expected - 40.89).abs() < 0.01);
    }

    #[test]
    fn rear_hemisphere_collapses_to_zero() {
        assert_eq!(correct_yaw(90.0001), 0.0);
        assert_eq!(correct_yaw(180.0), 0.0);
        assert_eq!(correct_yaw(269.9), 0.0);
    }

    #[test]
    fn wraparound_quadrant_mirrors_forward() {
        // 359° should correct by the same amount 1° does, mirrored at 360°.
        let forward = correct_yaw(1.0);
        let wraparound = correct_yaw(359.0);
        assert!((wraparound - (360.0 - forward)).abs() < 1e-3);
    }

    #[test]
    fn out_of_turn_inputs_fall_back_to_zero() {
        assert_eq!(correct_yaw(-45.0), 0.0);
        assert_eq!(correct_yaw(405.0), 0.0);
        assert_eq!(correct_yaw(-720.0), 0.0);
    }
}
