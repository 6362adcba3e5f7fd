//! System clock.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Reads the wall clock on every call.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_the_wall_clock() {
        let before = Utc::now();
        let now = LiveClock.now();
        assert!(now >= before);
        assert!(now <= Utc::now());
    }
}
