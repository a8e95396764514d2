//! Sensor model (correction).

use mg_core::{ColorClass, SensorParams};
use mg_world::ColorMap;

use crate::{BeliefError, BeliefGrid, BeliefResult};

/// Likelihood weighting by a single observed color class.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SensorModel {
    params: SensorParams,
}

impl Default for SensorModel {
    fn default() -> Self {
        Self::new(SensorParams::default())
    }
}

impl SensorModel {
    pub fn new(params: SensorParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &SensorParams {
        &self.params
    }

    /// P(observed | robot on a cell of class `class`).
    #[inline]
    pub fn likelihood(&self, observed: ColorClass, class: ColorClass) -> f64 {
        if observed == class { self.params.hit } else { self.params.miss }
    }

    /// Multiply every cell by its likelihood.  The result is not normalized;
    /// its [`total`](BeliefGrid::total) is the evidence for `observed`.
    pub fn weigh(
        &self,
        predicted: &BeliefGrid,
        observed:  ColorClass,
        colors:    &ColorMap,
    ) -> BeliefResult<BeliefGrid> {
        if predicted.dims() != colors.dims() {
            return Err(BeliefError::DimensionMismatch {
                expected: predicted.dims(),
                got:      colors.dims(),
            });
        }

        #[cfg(feature = "parallel")]
        let weighted: Vec<f64> = {
            use rayon::prelude::*;
            predicted
                .values()
                .par_iter()
                .zip(colors.as_slice().par_iter())
                .map(|(&p, &class)| p * self.likelihood(observed, class))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let weighted: Vec<f64> = predicted
            .values()
            .iter()
            .zip(colors.as_slice())
            .map(|(&p, &class)| p * self.likelihood(observed, class))
            .collect();

        Ok(BeliefGrid::from_raw(predicted.dims(), weighted))
    }

    /// [`weigh`](Self::weigh) then normalize.
    ///
    /// Returns the posterior and the evidence (pre-normalization sum).
    pub fn correct(
        &self,
        predicted: &BeliefGrid,
        observed:  ColorClass,
        colors:    &ColorMap,
    ) -> BeliefResult<(BeliefGrid, f64)> {
        let weighted = self.weigh(predicted, observed, colors)?;
        let evidence = weighted.total();
        Ok((weighted.normalized()?, evidence))
    }
}
