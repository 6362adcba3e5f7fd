//! Live random source backed by a seedable `StdRng`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::random::RandomSource;

/// Pseudo-random source; the same seed replays the same run.
pub struct LiveRandom {
    rng: StdRng,
}

impl LiveRandom {
    /// Creates a source from an explicit seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl RandomSource for LiveRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
