//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the generator core and the
//! outside world (time, disk, randomness). Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod random;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use random::RandomSource;
