//! Injectable randomness.
//!
//! The engine draws two kinds of numbers: which potato a new game gets,
//! and the explosion roll. Both go through [`RandomSource`] so tests can
//! script exact outcomes instead of relying on a process-wide seed.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform integers.
pub trait RandomSource: Send + Sync + 'static {
    /// Returns a uniform integer in `0..upper`. Callers never pass 0.
    fn below(&self, upper: u32) -> u32;
}

/// Thread-local OS-seeded RNG. The production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn below(&self, upper: u32) -> u32 {
        rand::rng().random_range(0..upper)
    }
}

/// A fixed-seed RNG: same seed, same sequence of games.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn below(&self, upper: u32) -> u32 {
        // A panic mid-draw can't leave the RNG in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0..upper)
    }
}

/// Replays a scripted list of values, then repeats `fallback` forever.
///
/// Values are clamped to `upper - 1`, so scripting `99` means "the highest
/// possible roll" whatever the range.
///
/// ```
/// use hotpotato_engine::{RandomSource, ScriptedRandom};
///
/// let rng = ScriptedRandom::new([0, 150]).with_fallback(7);
/// assert_eq!(rng.below(4), 0);
/// assert_eq!(rng.below(100), 99);
/// assert_eq!(rng.below(100), 7);
/// ```
#[derive(Debug)]
pub struct ScriptedRandom {
    values: Mutex<VecDeque<u32>>,
    fallback: u32,
}

impl ScriptedRandom {
    /// Scripts `values`; once exhausted every draw is the maximum.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
            fallback: u32::MAX,
        }
    }

    /// Changes what's returned after the script runs out.
    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Appends more values to the script.
    pub fn push(&self, values: impl IntoIterator<Item = u32>) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(values);
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&self, upper: u32) -> u32 {
        let next = self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(self.fallback);
        next.min(upper.saturating_sub(1))
    }
}
