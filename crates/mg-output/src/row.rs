//! Plain data row types written by output backends.

use mg_belief::{BeliefGrid, StepReport};
use mg_core::{Cell, ColorClass, Direction};
use mg_world::ColorMap;

/// One cell of a belief snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeliefCellRow {
    pub step:        u64,
    pub row:         usize,
    pub col:         usize,
    pub class:       ColorClass,
    pub probability: f64,
    /// `true` on the robot's true cell.
    pub robot:       bool,
}

impl BeliefCellRow {
    /// Every cell of `belief` in row-major order.
    pub fn snapshot(step: u64, belief: &BeliefGrid, colors: &ColorMap, robot: Cell) -> Vec<Self> {
        belief
            .iter()
            .map(|(cell, probability)| BeliefCellRow {
                step,
                row:   cell.row,
                col:   cell.col,
                class: colors.get(cell).unwrap_or_default(),
                probability,
                robot: cell == robot,
            })
            .collect()
    }
}

/// Summary of one belief step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub step:             u64,
    pub direction:        Direction,
    pub robot_row:        usize,
    pub robot_col:        usize,
    pub observed:         ColorClass,
    pub predicted_mass:   f64,
    pub evidence:         f64,
    pub best_row:         usize,
    pub best_col:         usize,
    pub best_probability: f64,
}

impl From<(u64, &StepReport)> for StepSummaryRow {
    fn from((step, report): (u64, &StepReport)) -> Self {
        StepSummaryRow {
            step,
            direction:        report.direction,
            robot_row:        report.agent.row,
            robot_col:        report.agent.col,
            observed:         report.observed,
            predicted_mass:   report.predicted_mass,
            evidence:         report.evidence,
            best_row:         report.best.row,
            best_col:         report.best.col,
            best_probability: report.best_probability,
        }
    }
}
