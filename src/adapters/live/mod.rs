//! Live adapters for real external interactions.

pub mod clock;
pub mod filesystem;
pub mod random;

pub use clock::LiveClock;
pub use filesystem::LiveFileSystem;
pub use random::LiveRandom;
