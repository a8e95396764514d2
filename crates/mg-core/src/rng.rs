//! Deterministic RNG for everything random in a localization run.
//!
//! # Where randomness is allowed
//!
//! Only the driver draws random numbers: assigning color classes at setup,
//! placing the robot, kicking it, and choosing a random move.  The belief
//! update itself is a pure function of its inputs and never sees an RNG, so
//! two runs with the same seed and the same commands produce identical
//! belief grids.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by the session driver.
///
/// Used only in single-threaded contexts.
pub struct SetupRng(SmallRng);

impl SetupRng {
    pub fn new(seed: u64) -> Self {
        SetupRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
