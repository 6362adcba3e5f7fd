//! Random source port.

/// Supplies uniformly distributed draws.
///
/// Every random decision in the generator goes through this trait so a run
/// can be replayed from a seed or scripted exactly in tests.
pub trait RandomSource {
    /// Returns a value uniformly distributed in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns an index uniformly distributed in `0..len`.
    ///
    /// `len` must be non-zero.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index() needs a non-empty range");
        let i = (self.next_f64() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }

    /// Returns a value uniformly distributed in `low..=high`.
    #[allow(clippy::cast_possible_truncation)]
    fn between(&mut self, low: u32, high: u32) -> u32 {
        debug_assert!(low <= high);
        low + self.index((high - low) as usize + 1) as u32
    }

    /// Returns `true` when a draw lands strictly above one half.
    fn coin(&mut self) -> bool {
        self.next_f64() > 0.5
    }
}
