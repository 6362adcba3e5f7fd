//! Service context bundling all port trait objects.

use crate::adapters::live::{LiveClock, LiveFileSystem, LiveRandom};
use crate::ports::{Clock, FileSystem, RandomSource};

/// Bundles one implementation of every port.
///
/// Commands take the context rather than reaching for the system directly,
/// so tests can swap in fixed clocks, scripted randomness or in-memory
/// filesystems.
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// Random source for fixture generation.
    pub rng: Box<dyn RandomSource>,
    seed: Option<u64>,
}

impl ServiceContext {
    /// Creates a live context.
    ///
    /// Without an explicit seed the random source is seeded from the clock;
    /// either way the seed is available from [`ServiceContext::seed`].
    #[must_use]
    pub fn live(seed: Option<u64>) -> Self {
        let clock = LiveClock;
        let seed = seed.unwrap_or_else(|| time_seed(&clock));
        Self {
            clock: Box::new(clock),
            fs: Box::new(LiveFileSystem),
            rng: Box::new(LiveRandom::seeded(seed)),
            seed: Some(seed),
        }
    }

    /// Creates a context from explicit port implementations.
    #[must_use]
    pub fn new(
        clock: Box<dyn Clock>,
        fs: Box<dyn FileSystem>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self { clock, fs, rng, seed: None }
    }

    /// Replaces the random source with a live one seeded from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = Box::new(LiveRandom::seeded(seed));
        self.seed = Some(seed);
    }

    /// Seed of the live random source, if known.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Derives a seed from the current time in nanoseconds.
fn time_seed(clock: &dyn Clock) -> u64 {
    let now = clock.now();
    now.timestamp_nanos_opt().map_or_else(|| now.timestamp().unsigned_abs(), i64::unsigned_abs)
}
