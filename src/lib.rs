//! Yawcorr maps raw viewer yaw angles to the corrected yaw expected by a
//! 360°/equirectangular video renderer.
//!
//! The equirectangular projection compresses horizontal angles unevenly, so
//! a yaw reported by pointer-drag or device-orientation tracking does not
//! land where the renderer's camera expects it. [`correct_yaw`] remaps the
//! forward-facing quadrants with a fixed calibration constant and collapses
//! the rear hemisphere to zero. [`CorrectionTable`] offers a precomputed
//! variant for per-frame lookup, with optional build-time events via the
//! `tracing` feature.

mod correct;
mod table;
mod trace;
pub mod util;

pub use correct::{correct_yaw, Region, EQUATOR_COMPRESSION};
pub use table::CorrectionTable;
pub use util::math::wrap_deg;
pub use util::{YawCorrError, YawCorrResult};
