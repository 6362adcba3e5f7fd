//! Random source that replays a fixed list of draws.

use crate::ports::random::RandomSource;

/// Serves draws from a script, wrapping around when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Creates a source that cycles through `draws`.
    ///
    /// An empty script behaves like [`ScriptedRandom::always`]`(0.0)`.
    #[must_use]
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Creates a source that returns `value` forever.
    #[must_use]
    pub fn always(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}
