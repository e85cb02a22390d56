//! Random-number capability shared by the evolutionary operators.
//!
//! Every stochastic decision in the engine goes through [`RandomSource`]:
//! tournament draws, crossover sites, the alternate-crossover trigger and
//! per-bit mutation. Any [`rand::Rng`] is a `RandomSource`; tests can
//! implement the trait directly to script exact draw sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Provider of uniform fractions, biased coins and uniform indices.
///
/// Only [`fraction`](RandomSource::fraction) is required. The default
/// `flip` and `below` consume exactly one fraction per call, so the number
/// of draws per generation is fixed by the population shape alone.
pub trait RandomSource {
    /// Returns a uniform value in `[0.0, 1.0)`.
    fn fraction(&mut self) -> f64;

    /// Biased coin toss: `true` with probability `probability`.
    fn flip(&mut self, probability: f64) -> bool {
        self.fraction() < probability
    }

    /// Uniform index in `0..n`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    fn below(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot draw an index below 0");
        ((self.fraction() * n as f64) as usize).min(n - 1)
    }
}

impl<R: Rng> RandomSource for R {
    fn fraction(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Creates a seeded RNG.
///
/// Runs with the same seed and configuration draw identical sequences.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
