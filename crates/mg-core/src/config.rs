//! Localization run configuration.
//!
//! `Default` is the stock scene: an 8 × 10 grid with half the
//! cells dark, a 91 / 3 / 3 / 1 / 2 motion split, and a 0.9 / 0.1 sensor.

use crate::{GridDims, GridError, GridResult};

/// Tolerance used when checking that the motion weights do not exceed 1.
const WEIGHT_SUM_EPS: f64 = 1e-9;

// ── MotionParams ──────────────────────────────────────────────────────────────

/// Per-source-cell split of belief mass for one commanded move.
///
/// `forward + 2 * side + backward + stay` is the fraction of a cell's mass
/// that survives the motion update when every neighbor exists.  Missing
/// neighbors at the grid edge drop their share; nothing is re-weighted.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionParams {
    /// Moves one step in the commanded direction.
    pub forward: f64,
    /// Moves one step to *each* perpendicular neighbor.
    pub side: f64,
    /// Moves one step against the commanded direction.
    pub backward: f64,
    /// Stays in the source cell.
    pub stay: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self { forward: 0.91, side: 0.03, backward: 0.01, stay: 0.02 }
    }
}

impl MotionParams {
    /// Total weight a fully interior cell hands out (including `stay`).
    #[inline]
    pub fn total(&self) -> f64 {
        self.forward + 2.0 * self.side + self.backward + self.stay
    }

    pub fn validate(&self) -> GridResult<()> {
        let named = [
            ("forward", self.forward),
            ("side", self.side),
            ("backward", self.backward),
            ("stay", self.stay),
        ];
        for (name, w) in named {
            if !w.is_finite() || w < 0.0 {
                return Err(GridError::Config(format!(
                    "motion weight `{name}` must be a finite non-negative number, got {w}"
                )));
            }
        }
        if self.total() > 1.0 + WEIGHT_SUM_EPS {
            return Err(GridError::Config(format!(
                "motion weights sum to {} (forward + 2*side + backward + stay must not exceed 1)",
                self.total()
            )));
        }
        Ok(())
    }
}

// ── SensorParams ──────────────────────────────────────────────────────────────

/// Likelihood of the observed color class given each candidate cell.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorParams {
    /// Multiplier for cells whose class matches the observation.
    pub hit: f64,
    /// Multiplier for cells whose class differs from the observation.
    pub miss: f64,
}

impl Default for SensorParams {
    fn default() -> Self {
        Self { hit: 0.9, miss: 0.1 }
    }
}

impl SensorParams {
    pub fn validate(&self) -> GridResult<()> {
        for (name, p) in [("hit", self.hit), ("miss", self.miss)] {
            if !(0.0..=1.0).contains(&p) {
                return Err(GridError::Config(format!(
                    "sensor likelihood `{name}` must lie in [0, 1], got {p}"
                )));
            }
        }
        Ok(())
    }
}

// ── DegeneratePolicy ──────────────────────────────────────────────────────────

/// What a belief step does when the sensor update leaves no mass to normalize.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DegeneratePolicy {
    /// Return `DegenerateDistribution`; the published belief is left as it
    /// was before the step.
    #[default]
    Fail,
    /// Replace the belief with the uniform distribution and carry on.
    ResetUniform,
}

// ── LocalizationConfig ────────────────────────────────────────────────────────

/// Top-level configuration for one localization session.
///
/// Typically built in code or loaded from JSON by the application crate
/// (enable the `serde` feature) and passed to the session builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocalizationConfig {
    /// Cells vertically down the grid.
    pub rows: usize,

    /// Cells horizontally across the grid.
    pub cols: usize,

    /// Master RNG seed.  The same seed and command sequence always produce
    /// identical runs.
    pub seed: u64,

    /// Probability that setup paints a cell dark.
    pub dark_fraction: f64,

    pub motion: MotionParams,

    pub sensor: SensorParams,

    pub on_degenerate: DegeneratePolicy,

    /// Emit a belief snapshot every N completed steps.  0 disables snapshots.
    pub snapshot_interval: u64,

    /// Stop a controller-driven run after this many commands.  `None` runs
    /// until the controller is exhausted.
    pub max_commands: Option<u64>,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            rows:              8,
            cols:              10,
            seed:              42,
            dark_fraction:     0.5,
            motion:            MotionParams::default(),
            sensor:            SensorParams::default(),
            on_degenerate:     DegeneratePolicy::Fail,
            snapshot_interval: 1,
            max_commands:      None,
        }
    }
}

impl LocalizationConfig {
    /// Validated grid dimensions for this run.
    #[inline]
    pub fn dims(&self) -> GridResult<GridDims> {
        GridDims::new(self.rows, self.cols)
    }

    /// Check every field; returns the first problem found.
    pub fn validate(&self) -> GridResult<()> {
        self.dims()?;
        if !(0.0..=1.0).contains(&self.dark_fraction) {
            return Err(GridError::Config(format!(
                "dark_fraction must lie in [0, 1], got {}",
                self.dark_fraction
            )));
        }
        self.motion.validate()?;
        self.sensor.validate()
    }
}
