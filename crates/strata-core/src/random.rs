//! The random-number capability consumed by processes and the engine.

use rand::{Rng, RngCore};

/// Source of uniform random draws.
///
/// The kinetic core never depends on a particular generator; it only
/// needs uniform integers in a half-open range and uniform reals in
/// `[0, 1)`. Every [`RngCore`] implements this trait, so a seeded
/// `ChaCha8Rng` can be passed straight in.
pub trait RandomSource {
    /// Uniform integer in `[low, high)`. Callers guarantee `low < high`.
    fn uniform_int(&mut self, low: usize, high: usize) -> usize;

    /// Uniform real in `[0, 1)`.
    fn uniform_real(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..high)
    }

    fn uniform_real(&mut self) -> f64 {
        self.random::<f64>()
    }
}
