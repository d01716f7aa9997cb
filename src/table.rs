//! Precomputed yaw correction over a uniform degree grid.

use crate::correct::correct_yaw;
use crate::trace::trace_event;
use crate::util::{YawCorrError, YawCorrResult};

/// Sampled yaw correction over `[min_deg, max_deg)` with a fixed step.
///
/// Per-frame callers can trade the per-call trigonometry of
/// [`correct_yaw`](crate::correct_yaw) for a table lookup. Grid angles are
/// raw caller-side degrees and are not wrapped, so the table reproduces the
/// zero-fallback of the correction function for whatever range it covers.
#[derive(Clone, Debug)]
pub struct CorrectionTable {
    min_deg: f32,
    max_deg: f32,
    step_deg: f32,
    values: Vec<f32>,
}

impl CorrectionTable {
    /// Creates a table over the full turn `[0, 360)`.
    pub fn full(step_deg: f32) -> YawCorrResult<Self> {
        Self::new(0.0, 360.0, step_deg)
    }

    /// Creates a table over `[min_deg, max_deg)` with a positive step.
    pub fn new(min_deg: f32, max_deg: f32, step_deg: f32) -> YawCorrResult<Self> {
        if !min_deg.is_finite() || !max_deg.is_finite() || !step_deg.is_finite() {
            return Err(YawCorrError::InvalidGrid {
                reason: "non-finite grid parameters",
            });
        }
        if step_deg <= 0.0 {
            return Err(YawCorrError::InvalidGrid {
                reason: "step_deg must be > 0",
            });
        }
        if max_deg <= min_deg {
            return Err(YawCorrError::InvalidGrid {
                reason: "max_deg must be greater than min_deg",
            });
        }

        let mut values = Vec::new();
        loop {
            let angle = min_deg + (values.len() as f32) * step_deg;
            if angle >= max_deg {
                break;
            }
            values.push(correct_yaw(angle));
        }
        if values.is_empty() {
            return Err(YawCorrError::InvalidGrid {
                reason: "grid produced no samples",
            });
        }

        trace_event!(
            "correction_table_built",
            len = values.len() as u64,
            step_deg = f64::from(step_deg),
        );

        Ok(Self {
            min_deg,
            max_deg,
            step_deg,
            values,
        })
    }

    /// Returns the number of grid samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the table has no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the minimum grid angle in degrees (inclusive).
    pub fn min_deg(&self) -> f32 {
        self.min_deg
    }

    /// Returns the maximum grid angle in degrees (exclusive).
    pub fn max_deg(&self) -> f32 {
        self.max_deg
    }

    /// Returns the grid step size in degrees.
    pub fn step_deg(&self) -> f32 {
        self.step_deg
    }

    /// Returns the grid angle for the given index.
    pub fn angle_at(&self, idx: usize) -> f32 {
        debug_assert!(idx < self.values.len());
        self.min_deg + (idx as f32) * self.step_deg
    }

    /// Returns the precomputed corrected yaw for the given index.
    pub fn value_at(&self, idx: usize) -> f32 {
        debug_assert!(idx < self.values.len());
        self.values[idx]
    }

    /// Iterates over `(grid_angle_deg, corrected_deg)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, value)| (self.angle_at(idx), *value))
    }

    /// Returns the corrected yaw at the grid angle nearest to `yaw_deg`.
    ///
    /// Angles outside the grid clamp to the first or last sample.
    pub fn nearest(&self, yaw_deg: f32) -> f32 {
        let last = self.values.len() - 1;
        let idx = ((yaw_deg - self.min_deg) / self.step_deg).round();
        let idx = idx.max(0.0) as usize;
        self.values[idx.min(last)]
    }

    /// Returns the corrected yaw at `yaw_deg`, linearly interpolated between
    /// the two bracketing grid samples.
    ///
    /// Angles outside the grid clamp to the edge samples. Interpolation does
    /// not smooth the correction's region boundaries; it samples them.
    pub fn sample(&self, yaw_deg: f32) -> f32 {
        let last = self.values.len() - 1;
        let t = (yaw_deg - self.min_deg) / self.step_deg;
        let t = t.max(0.0).min(last as f32);
        let lo = t.floor() as usize;
        if lo >= last {
            return self.values[last];
        }
        let frac = t - (lo as f32);
        self.values[lo] + frac * (self.values[lo + 1] - self.values[lo])
    }
}
