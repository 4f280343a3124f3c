//! Randomness as an injected dependency.
//!
//! Every probabilistic step takes an explicit [`RandomSource`] instead of
//! reaching for a global generator, so runs replay deterministically from a
//! seed and parallel trials stay isolated.

use rand::Rng;

/// A source of uniform floats in `[0, 1)`.
///
/// Any [`rand::Rng`] qualifies via the blanket impl; entry points seed a
/// `ChaCha8Rng` per run.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen()
    }
}

/// Source that yields the same value on every draw.
///
/// Forces deterministic outcomes: a value below the favorite's win
/// probability makes the favorite sweep.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub f64);

impl RandomSource for FixedSource {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}
