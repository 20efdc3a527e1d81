//! Injectable randomness for contest resolution.
//!
//! Resolution only ever needs uniform draws in `[0, 1)`, so that is the
//! whole seam: production runs hand in a [`rand`] generator through
//! [`RngSource`], tests script exact draws with [`FixedSource`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

/// Adapter exposing any [`rand::Rng`] as a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl RngSource<StdRng> {
    /// Entropy-seeded source for normal runs.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible source: the same seed replays the same tournament.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a programmed sequence of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<f64>,
    next: usize,
}

impl FixedSource {
    /// A source that yields `value` on every draw.
    pub fn constant(value: f64) -> Self {
        Self::sequence(vec![value])
    }

    /// A source that cycles through `values` in order.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn sequence(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "FixedSource needs at least one value");
        Self { values, next: 0 }
    }
}

impl RandomSource for FixedSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}
