//! Fluent builder for constructing a [`Session`].

use mg_belief::BeliefEngine;
use mg_core::{Cell, LocalizationConfig, SetupRng};
use mg_world::{ColorMap, Robot};
use tracing::info;

use crate::{Session, SessionError, SessionResult};

/// Fluent builder for [`Session`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                                   |
/// |------------------|-----------------------------------------------------------|
/// | `.colors(map)`   | `ColorMap::random` with `config.dark_fraction`            |
/// | `.robot_at(c)`   | A uniformly random cell                                   |
///
/// Anything not supplied is drawn from `SetupRng::new(config.seed)`, so two
/// builds from the same config produce the same world.
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(LocalizationConfig::default())
///     .colors("#.#\n...\n#.#".parse()?)
///     .robot_at(Cell::new(1, 1))
///     .build()?;
/// session.move_robot(Direction::Up)?;
/// ```
pub struct SessionBuilder {
    config: LocalizationConfig,
    colors: Option<ColorMap>,
    robot:  Option<Cell>,
}

impl SessionBuilder {
    pub fn new(config: LocalizationConfig) -> Self {
        Self { config, colors: None, robot: None }
    }

    /// Use a fixed color map.  Its dimensions must match `config.rows ×
    /// config.cols`.
    pub fn colors(mut self, colors: ColorMap) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Start the robot on `cell`.
    pub fn robot_at(mut self, cell: Cell) -> Self {
        self.robot = Some(cell);
        self
    }

    /// Validate inputs, draw whatever was not supplied, and return a session
    /// with a uniform belief.
    pub fn build(self) -> SessionResult<Session> {
        self.config.validate()?;
        let dims = self.config.dims()?;
        let mut rng = SetupRng::new(self.config.seed);

        // ── Validate and resolve optional inputs ──────────────────────────
        let colors = match self.colors {
            Some(map) => {
                if map.dims() != dims {
                    return Err(SessionError::Config(format!(
                        "color map is {} but config asks for {dims}",
                        map.dims()
                    )));
                }
                map
            }
            None => ColorMap::random(dims, self.config.dark_fraction, &mut rng),
        };
        let robot = match self.robot {
            Some(cell) => Robot::place(dims, cell)?,
            None => Robot::random(dims, &mut rng),
        };

        let engine = BeliefEngine::from_config(&self.config, colors)?;
        info!(
            %dims,
            seed = self.config.seed,
            robot = %robot.position(),
            "session built"
        );

        Ok(Session::from_parts(self.config, rng, robot, engine))
    }
}
