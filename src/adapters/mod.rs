//! Port implementations.
//!
//! `live` talks to the real system; `scripted` serves fixed values so tests
//! can assert exact generator output.

pub mod live;
pub mod scripted;
