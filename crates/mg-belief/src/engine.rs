//! The belief grid engine: predict → correct → normalize, one step at a time.

use mg_core::{
    Cell, ColorClass, DegeneratePolicy, Direction, GridDims, LocalizationConfig, MotionParams,
    SensorParams,
};
use mg_world::ColorMap;
use tracing::{debug, warn};

use crate::{BeliefError, BeliefGrid, BeliefResult, MotionKernel, SensorModel};

/// What one step did, for logging and output.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepReport {
    pub direction: Direction,

    /// The cell the observation was read from (robot position after the move).
    pub agent: Cell,

    pub observed: ColorClass,

    /// Grid total after the motion pass.  Below 1 whenever mass was pushed
    /// across the grid boundary.
    pub predicted_mass: f64,

    /// Grid total after the sensor pass, before normalization.
    pub evidence: f64,

    /// Most likely cell in the published belief.
    pub best: Cell,

    pub best_probability: f64,

    /// `true` if the evidence was degenerate and the belief was reset to
    /// uniform under [`DegeneratePolicy::ResetUniform`].
    pub reset: bool,
}

/// Owns the belief grid and the read-only color map it is corrected against.
///
/// Each [`step`](Self::step) computes a fresh grid for every pass and swaps
/// it in only once all passes succeed, so a reader between steps always sees
/// a normalized distribution and a failed step leaves the previous belief in
/// place.
///
/// # Example
///
/// ```rust,ignore
/// let colors: ColorMap = "#.#\n...\n#.#".parse()?;
/// let mut engine = BeliefEngine::initialize(3, 3, colors)?;
/// let report = engine.step(Direction::Up, Cell::new(0, 1))?;
/// assert!((engine.belief().total() - 1.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct BeliefEngine {
    colors: ColorMap,
    belief: BeliefGrid,
    motion: MotionKernel,
    sensor: SensorModel,
    policy: DegeneratePolicy,
    steps:  u64,
}

impl BeliefEngine {
    /// Uniform belief over a `rows × cols` grid using default kernel and
    /// sensor parameters.
    ///
    /// Fails with `InvalidDimensions` if either side is zero and with
    /// `DimensionMismatch` if `colors` was built for a different grid.
    pub fn initialize(rows: usize, cols: usize, colors: ColorMap) -> BeliefResult<Self> {
        let dims = GridDims::new(rows, cols)?;
        if colors.dims() != dims {
            return Err(BeliefError::DimensionMismatch { expected: dims, got: colors.dims() });
        }
        Ok(Self {
            belief: BeliefGrid::uniform(dims),
            colors,
            motion: MotionKernel::default(),
            sensor: SensorModel::default(),
            policy: DegeneratePolicy::default(),
            steps:  0,
        })
    }

    /// [`initialize`](Self::initialize) with every parameter taken from
    /// `config`.  The config is validated first.
    pub fn from_config(config: &LocalizationConfig, colors: ColorMap) -> BeliefResult<Self> {
        config.validate()?;
        Ok(Self::initialize(config.rows, config.cols, colors)?
            .with_motion(config.motion)
            .with_sensor(config.sensor)
            .with_policy(config.on_degenerate))
    }

    pub fn with_motion(mut self, params: MotionParams) -> Self {
        self.motion = MotionKernel::new(params);
        self
    }

    pub fn with_sensor(mut self, params: SensorParams) -> Self {
        self.sensor = SensorModel::new(params);
        self
    }

    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn belief(&self) -> &BeliefGrid {
        &self.belief
    }

    #[inline]
    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.belief.dims()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.belief.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.belief.cols()
    }

    pub fn probability_at(&self, row: usize, col: usize) -> BeliefResult<f64> {
        self.belief.probability_at(Cell::new(row, col))
    }

    /// Steps completed since the last initialize / reset.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[inline]
    pub fn motion(&self) -> &MotionKernel {
        &self.motion
    }

    #[inline]
    pub fn sensor(&self) -> &SensorModel {
        &self.sensor
    }

    #[inline]
    pub fn policy(&self) -> DegeneratePolicy {
        self.policy
    }

    // ── Updates ───────────────────────────────────────────────────────────

    /// Back to the uniform distribution.
    pub fn reset(&mut self) {
        self.belief = BeliefGrid::uniform(self.dims());
        self.steps = 0;
    }

    /// Run one predict → correct → normalize cycle against the engine's own
    /// belief and publish the result.
    ///
    /// `agent` is the robot's true cell *after* the caller moved it; only its
    /// color class is read.  Fails with `OutOfBounds` if it is off-grid.
    pub fn step(&mut self, direction: Direction, agent: Cell) -> BeliefResult<StepReport> {
        let (posterior, report) = self.update(&self.belief, direction, agent)?;
        self.belief = posterior;
        self.steps += 1;

        debug!(
            step = self.steps,
            %direction,
            %agent,
            observed = %report.observed,
            predicted_mass = report.predicted_mass,
            evidence = report.evidence,
            best = %report.best,
            best_probability = report.best_probability,
            "belief step"
        );
        Ok(report)
    }

    /// The pure form of [`step`](Self::step): compute the posterior of
    /// `prior` without touching the engine's state.
    ///
    /// Deterministic: identical inputs always yield identical output.
    pub fn update(
        &self,
        prior:     &BeliefGrid,
        direction: Direction,
        agent:     Cell,
    ) -> BeliefResult<(BeliefGrid, StepReport)> {
        if prior.dims() != self.colors.dims() {
            return Err(BeliefError::DimensionMismatch {
                expected: self.colors.dims(),
                got:      prior.dims(),
            });
        }
        let observed = self.colors.class_at(agent)?;

        let predicted = self.motion.predict(prior, direction);
        let predicted_mass = predicted.total();

        let weighted = self.sensor.weigh(&predicted, observed, &self.colors)?;
        let evidence = weighted.total();

        let (posterior, reset) = match weighted.normalized() {
            Ok(grid) => (grid, false),
            Err(BeliefError::DegenerateDistribution { sum })
                if self.policy == DegeneratePolicy::ResetUniform =>
            {
                warn!(%direction, %agent, sum, "degenerate belief; resetting to uniform");
                (BeliefGrid::uniform(prior.dims()), true)
            }
            Err(e) => return Err(e),
        };

        let (best, best_probability) = posterior.most_likely();
        let report = StepReport {
            direction,
            agent,
            observed,
            predicted_mass,
            evidence,
            best,
            best_probability,
            reset,
        };
        Ok((posterior, report))
    }
}
