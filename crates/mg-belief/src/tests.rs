//! Unit tests for mg-belief.

use mg_core::{Cell, ColorClass, Direction, GridDims, MotionParams, SetupRng};
use mg_world::ColorMap;

use crate::{BeliefEngine, BeliefError, BeliefGrid, MotionKernel, SensorModel};

// ── Helpers ───────────────────────────────────────────────────────────────────

const EPS: f64 = 1e-9;

fn dims(rows: usize, cols: usize) -> GridDims {
    GridDims::new(rows, cols).unwrap()
}

/// 3×3: centre and its 4-neighbors light, corners dark.
fn plus_map() -> ColorMap {
    "#.#\n...\n#.#".parse().unwrap()
}

/// All mass on `cell`.
fn point_mass(d: GridDims, cell: Cell) -> BeliefGrid {
    let mut v = vec![0.0; d.cell_count()];
    v[d.index(cell).unwrap()] = 1.0;
    BeliefGrid::from_values(d, v).unwrap()
}

/// Straightforward scatter formulation: start from zero, push every source's
/// shares into its on-grid neighbors, read only from `prior`.
fn scatter_naive(prior: &BeliefGrid, dir: Direction, p: &MotionParams) -> Vec<f64> {
    let d = prior.dims();
    let mut out = vec![0.0; d.cell_count()];
    let [a, b] = dir.perpendicular();
    let shares = [
        (dir.offset(), p.forward),
        (a.offset(), p.side),
        (b.offset(), p.side),
        (dir.opposite().offset(), p.backward),
    ];
    for (src, mass) in prior.iter() {
        out[d.index(src).unwrap()] += mass * p.stay;
        for (off, w) in shares {
            if let Some(t) = d.neighbor(src, off) {
                out[d.index(t).unwrap()] += mass * w;
            }
        }
    }
    out
}

fn random_prior(d: GridDims, seed: u64) -> BeliefGrid {
    let mut rng = SetupRng::new(seed);
    let v: Vec<f64> = (0..d.cell_count()).map(|_| rng.gen_range(0.0..1.0)).collect();
    BeliefGrid::from_values(d, v).unwrap().normalized().unwrap()
}

// ── BeliefGrid ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_tests {
    use super::*;

    #[test]
    fn uniform_is_one_over_cell_count() {
        let g = BeliefGrid::uniform(dims(8, 10));
        for (_, p) in g.iter() {
            assert!((p - 1.0 / 80.0).abs() < EPS);
        }
        assert!((g.total() - 1.0).abs() < EPS);
    }

    #[test]
    fn from_values_validates() {
        assert!(matches!(
            BeliefGrid::from_values(dims(2, 2), vec![0.25; 3]),
            Err(BeliefError::LengthMismatch { expected: 4, got: 3, .. })
        ));
        match BeliefGrid::from_values(dims(2, 2), vec![0.25, -0.1, 0.25, 0.25]) {
            Err(BeliefError::InvalidProbability { cell, .. }) => assert_eq!(cell, Cell::new(0, 1)),
            other => panic!("expected InvalidProbability, got {other:?}"),
        }
        assert!(BeliefGrid::from_values(dims(1, 1), vec![f64::NAN]).is_err());
    }

    #[test]
    fn probability_at_bounds() {
        let g = BeliefGrid::uniform(dims(2, 3));
        assert!((g.probability_at(Cell::new(1, 2)).unwrap() - 1.0 / 6.0).abs() < EPS);
        assert!(matches!(
            g.probability_at(Cell::new(2, 0)),
            Err(BeliefError::Grid(mg_core::GridError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn most_likely_prefers_first_on_tie() {
        let g = BeliefGrid::from_values(dims(2, 2), vec![0.1, 0.4, 0.4, 0.1]).unwrap();
        assert_eq!(g.most_likely(), (Cell::new(0, 1), 0.4));
    }

    #[test]
    fn row_slices() {
        let g = BeliefGrid::from_values(dims(2, 2), vec![0.1, 0.2, 0.3, 0.4]).unwrap();
        assert_eq!(g.row(1), Some(&[0.3, 0.4][..]));
        assert_eq!(g.row(2), None);
    }

    #[test]
    fn normalize_zero_is_degenerate() {
        let g = BeliefGrid::from_values(dims(1, 3), vec![0.0; 3]).unwrap();
        assert!(matches!(
            g.normalized(),
            Err(BeliefError::DegenerateDistribution { sum }) if sum == 0.0
        ));
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion_tests {
    use super::*;

    #[test]
    fn interior_point_mass_follows_kernel() {
        let d = dims(3, 3);
        let out = MotionKernel::default().predict(&point_mass(d, Cell::new(1, 1)), Direction::Up);
        let at = |r, c| out.get(Cell::new(r, c)).unwrap();
        assert!((at(0, 1) - 0.91).abs() < EPS);
        assert!((at(1, 0) - 0.03).abs() < EPS);
        assert!((at(1, 2) - 0.03).abs() < EPS);
        assert!((at(2, 1) - 0.01).abs() < EPS);
        assert!((at(1, 1) - 0.02).abs() < EPS);
        assert_eq!(at(0, 0), 0.0);
        assert!((out.total() - 1.0).abs() < EPS, "interior move keeps all mass");
    }

    #[test]
    fn right_move_uses_vertical_perpendiculars() {
        let d = dims(3, 3);
        let out = MotionKernel::default().predict(&point_mass(d, Cell::new(1, 1)), Direction::Right);
        assert!((out.get(Cell::new(1, 2)).unwrap() - 0.91).abs() < EPS);
        assert!((out.get(Cell::new(0, 1)).unwrap() - 0.03).abs() < EPS);
        assert!((out.get(Cell::new(2, 1)).unwrap() - 0.03).abs() < EPS);
        assert!((out.get(Cell::new(1, 0)).unwrap() - 0.01).abs() < EPS);
    }

    #[test]
    fn edge_mass_is_lost_not_retained() {
        let d = dims(3, 3);
        let kernel = MotionKernel::default();

        // Against the top wall the 91 % forward share has nowhere to go.
        let edge = kernel.predict(&point_mass(d, Cell::new(0, 1)), Direction::Up);
        assert!((edge.total() - 0.09).abs() < EPS, "got {}", edge.total());
        assert!((edge.get(Cell::new(0, 1)).unwrap() - 0.02).abs() < EPS);

        let interior = kernel.predict(&point_mass(d, Cell::new(1, 1)), Direction::Up);
        assert!(edge.total() < interior.total());
    }

    #[test]
    fn corner_loses_forward_and_one_side() {
        let d = dims(3, 3);
        let out = MotionKernel::default().predict(&point_mass(d, Cell::new(0, 0)), Direction::Up);
        // stay 0.02 + right side 0.03 + backward 0.01
        assert!((out.total() - 0.06).abs() < EPS);
    }

    #[test]
    fn uniform_prior_under_sums_after_boundary_move() {
        let d = dims(3, 3);
        let out = MotionKernel::default().predict(&BeliefGrid::uniform(d), Direction::Up);
        assert!(out.total() < 1.0);
        // (1,1) receives every share; (0,1) misses its backward source.
        assert!((out.get(Cell::new(1, 1)).unwrap() - 1.00 / 9.0).abs() < EPS);
        assert!((out.get(Cell::new(0, 1)).unwrap() - 0.99 / 9.0).abs() < EPS);
    }

    #[test]
    fn gather_matches_scatter_for_all_directions() {
        let d = dims(4, 5);
        let prior = random_prior(d, 11);
        let kernel = MotionKernel::default();
        for dir in Direction::ALL {
            let got = kernel.predict(&prior, dir);
            let want = scatter_naive(&prior, dir, kernel.params());
            for (g, w) in got.values().iter().zip(&want) {
                assert!((g - w).abs() < 1e-12, "{dir}: {g} vs {w}");
            }
        }
    }

    #[test]
    fn single_cell_keeps_only_stay_share() {
        let out = MotionKernel::default().predict(&BeliefGrid::uniform(dims(1, 1)), Direction::Left);
        assert!((out.total() - 0.02).abs() < EPS);
    }
}

// ── Sensor ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sensor_tests {
    use super::*;

    #[test]
    fn two_cell_weighting() {
        let d = dims(1, 2);
        let colors = ColorMap::from_fn(d, |c| {
            if c.col == 0 { ColorClass::Light } else { ColorClass::Dark }
        });
        let prior = BeliefGrid::from_values(d, vec![0.5, 0.5]).unwrap();
        let (post, evidence) = SensorModel::default()
            .correct(&prior, ColorClass::Light, &colors)
            .unwrap();
        assert!((evidence - 0.5).abs() < EPS);
        assert!((post.values()[0] - 0.9).abs() < EPS);
        assert!((post.values()[1] - 0.1).abs() < EPS);
    }

    #[test]
    fn likelihood_table() {
        let s = SensorModel::default();
        assert_eq!(s.likelihood(ColorClass::Dark, ColorClass::Dark), 0.9);
        assert_eq!(s.likelihood(ColorClass::Dark, ColorClass::Light), 0.1);
    }

    #[test]
    fn dims_must_match_color_map() {
        let prior = BeliefGrid::uniform(dims(2, 2));
        let err = SensorModel::default().weigh(&prior, ColorClass::Light, &plus_map());
        assert!(matches!(err, Err(BeliefError::DimensionMismatch { .. })));
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine_tests {
    use mg_core::{DegeneratePolicy, GridError, LocalizationConfig, SensorParams};

    use super::*;

    #[test]
    fn initialize_is_uniform() {
        let engine = BeliefEngine::initialize(3, 3, plus_map()).unwrap();
        assert_eq!((engine.rows(), engine.cols()), (3, 3));
        for r in 0..3 {
            for c in 0..3 {
                assert!((engine.probability_at(r, c).unwrap() - 1.0 / 9.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn initialize_rejects_zero_dims() {
        let err = BeliefEngine::initialize(0, 3, plus_map());
        assert!(matches!(
            err,
            Err(BeliefError::Grid(GridError::InvalidDimensions { rows: 0, cols: 3 }))
        ));
    }

    #[test]
    fn initialize_rejects_mismatched_colors() {
        let err = BeliefEngine::initialize(2, 2, plus_map());
        assert!(matches!(err, Err(BeliefError::DimensionMismatch { .. })));
    }

    #[test]
    fn end_to_end_uniform_prior() {
        let mut engine = BeliefEngine::initialize(3, 3, plus_map()).unwrap();
        let report = engine.step(Direction::Up, Cell::new(0, 1)).unwrap();

        assert_eq!(report.observed, ColorClass::Light);
        assert!((report.predicted_mass - 6.06 / 9.0).abs() < EPS);
        assert!((report.evidence - 3.822 / 9.0).abs() < EPS);

        let b = engine.belief();
        assert!((b.total() - 1.0).abs() < 1e-6);
        assert!(b.values().iter().all(|&p| (0.0..=1.0).contains(&p)));

        // (0,1) leads its row and beats every dark corner.
        let top = b.get(Cell::new(0, 1)).unwrap();
        assert!((top - 0.891 / 3.822).abs() < EPS);
        for c in [Cell::new(0, 0), Cell::new(0, 2), Cell::new(2, 0), Cell::new(2, 2)] {
            assert!(top > b.get(c).unwrap());
        }
        // Under a uniform prior the centre collects one more percent of mass.
        assert_eq!(report.best, Cell::new(1, 1));
        assert!((report.best_probability - 0.9 / 3.822).abs() < EPS);
    }

    #[test]
    fn end_to_end_known_start() {
        let engine = BeliefEngine::initialize(3, 3, plus_map()).unwrap();
        let prior = point_mass(engine.dims(), Cell::new(1, 1));
        let (post, report) = engine.update(&prior, Direction::Up, Cell::new(0, 1)).unwrap();
        assert_eq!(report.best, Cell::new(0, 1));
        assert!((post.get(Cell::new(0, 1)).unwrap() - 0.91).abs() < EPS);
        assert!((post.total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn out_of_bounds_agent_leaves_belief_untouched() {
        let mut engine = BeliefEngine::initialize(3, 3, plus_map()).unwrap();
        let before = engine.belief().clone();
        let err = engine.step(Direction::Down, Cell::new(3, 1));
        assert!(matches!(err, Err(BeliefError::Grid(GridError::OutOfBounds { .. }))));
        assert_eq!(engine.belief(), &before);
        assert_eq!(engine.steps(), 0);
    }

    #[test]
    fn update_is_deterministic() {
        let mut rng = SetupRng::new(5);
        let colors = ColorMap::random(dims(6, 7), 0.5, &mut rng);
        let engine = BeliefEngine::initialize(6, 7, colors).unwrap();
        let prior = random_prior(engine.dims(), 9);
        let a = engine.update(&prior, Direction::Left, Cell::new(2, 3)).unwrap();
        let b = engine.update(&prior, Direction::Left, Cell::new(2, 3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invariants_hold_over_long_walk() {
        let mut rng = SetupRng::new(2016);
        let d = dims(8, 10);
        let colors = ColorMap::random(d, 0.5, &mut rng);
        let mut robot = mg_world::Robot::random(d, &mut rng);
        let mut engine = BeliefEngine::initialize(8, 10, colors).unwrap();

        for _ in 0..300 {
            let open = robot.open_directions();
            let dir = *rng.choose(&open).unwrap();
            assert!(robot.try_move(dir));
            engine.step(dir, robot.position()).unwrap();

            let b = engine.belief();
            assert!((b.total() - 1.0).abs() < 1e-6, "sum drifted to {}", b.total());
            assert!(b.values().iter().all(|&p| (0.0..=1.0).contains(&p)));
        }
        assert_eq!(engine.steps(), 300);
    }

    #[test]
    fn reset_restores_uniform() {
        let mut engine = BeliefEngine::initialize(3, 3, plus_map()).unwrap();
        engine.step(Direction::Up, Cell::new(0, 1)).unwrap();
        engine.step(Direction::Left, Cell::new(0, 0)).unwrap();
        engine.reset();
        assert_eq!(engine.belief(), &BeliefGrid::uniform(dims(3, 3)));
        assert_eq!(engine.steps(), 0);

        let fresh = BeliefEngine::initialize(3, 3, plus_map()).unwrap();
        assert_eq!(fresh.belief(), engine.belief());
    }

    #[test]
    fn single_cell_grid_stays_certain() {
        let colors = ColorMap::uniform(dims(1, 1), ColorClass::Dark);
        let mut engine = BeliefEngine::initialize(1, 1, colors).unwrap();
        engine.step(Direction::Right, Cell::new(0, 0)).unwrap();
        assert!((engine.probability_at(0, 0).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn degenerate_fails_by_default() {
        let mut engine = BeliefEngine::initialize(3, 3, plus_map())
            .unwrap()
            .with_sensor(SensorParams { hit: 0.0, miss: 0.0 });
        let before = engine.belief().clone();
        let err = engine.step(Direction::Up, Cell::new(0, 1));
        assert!(matches!(err, Err(BeliefError::DegenerateDistribution { .. })));
        assert_eq!(engine.belief(), &before);
    }

    #[test]
    fn degenerate_can_reset_to_uniform() {
        let mut engine = BeliefEngine::initialize(3, 3, plus_map())
            .unwrap()
            .with_sensor(SensorParams { hit: 0.0, miss: 0.0 })
            .with_policy(DegeneratePolicy::ResetUniform);
        let report = engine.step(Direction::Up, Cell::new(0, 1)).unwrap();
        assert!(report.reset);
        assert_eq!(engine.belief(), &BeliefGrid::uniform(dims(3, 3)));
    }

    #[test]
    fn from_config_applies_parameters() {
        let cfg = LocalizationConfig {
            rows: 3,
            cols: 3,
            sensor: SensorParams { hit: 1.0, miss: 0.0 },
            ..Default::default()
        };
        let mut engine = BeliefEngine::from_config(&cfg, plus_map()).unwrap();
        engine.step(Direction::Up, Cell::new(0, 1)).unwrap();
        // A perfect sensor zeroes every dark corner.
        for c in [Cell::new(0, 0), Cell::new(2, 2)] {
            assert_eq!(engine.belief().get(c).unwrap(), 0.0);
        }
    }

    #[test]
    fn from_config_validates() {
        let cfg = LocalizationConfig { rows: 3, cols: 3, dark_fraction: -1.0, ..Default::default() };
        assert!(matches!(
            BeliefEngine::from_config(&cfg, plus_map()),
            Err(BeliefError::Grid(GridError::Config(_)))
        ));
    }
}
