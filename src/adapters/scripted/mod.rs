//! Scripted adapters serving predetermined values.

pub mod clock;
pub mod random;

pub use clock::FixedClock;
pub use random::ScriptedRandom;
