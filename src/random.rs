//! Random number source used by every stochastic operator.
//!
//! All draws in a run go through a single [`RandomSource`], passed
//! explicitly to the operators and the controller. Two kinds of draws are
//! needed:
//!
//! - continuous draws in `[0, 1)` for roulette selection and crossover
//!   inclusion tests
//! - discrete draws for gene values, crossover points and mutation targets
//!
//! [`RngSource`] adapts any [`rand::Rng`] to this trait. Tests can supply
//! their own implementation to script exact draw sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random draws.
pub trait RandomSource {
    /// Uniform real in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in the closed range `[low, high]`.
    ///
    /// Callers guarantee `low <= high`.
    fn next_in_range(&mut self, low: i64, high: i64) -> i64;

    /// Uniform index in `[0, len)`.
    ///
    /// Callers guarantee `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        (**self).next_in_range(low, high)
    }

    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(create_rng(seed))
    }

    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        self.rng.random_range(low..=high)
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Creates a seeded standard generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;
    use std::collections::VecDeque;

    /// Replays pre-recorded draws in order.
    ///
    /// Panics when a draw of the wrong kind is requested or the script runs
    /// out, which makes draw-order mistakes visible in tests.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedSource {
        units: VecDeque<f64>,
        ints: VecDeque<i64>,
    }

    impl ScriptedSource {
        pub(crate) fn new(units: &[f64], ints: &[i64]) -> Self {
            Self {
                units: units.iter().copied().collect(),
                ints: ints.iter().copied().collect(),
            }
        }

        pub(crate) fn is_exhausted(&self) -> bool {
            self.units.is_empty() && self.ints.is_empty()
        }
    }

    impl RandomSource for ScriptedSource {
        fn next_unit(&mut self) -> f64 {
            self.units.pop_front().expect("scripted unit draws exhausted")
        }

        fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
            let v = self.ints.pop_front().expect("scripted int draws exhausted");
            assert!(
                (low..=high).contains(&v),
                "scripted draw {v} outside [{low}, {high}]"
            );
            v
        }

        fn next_index(&mut self, len: usize) -> usize {
            let v = self.ints.pop_front().expect("scripted int draws exhausted");
            assert!(v >= 0 && (v as usize) < len, "scripted index {v} outside [0, {len})");
            v as usize
        }
    }
}
