//! Fixed clock returning a scripted instant.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Clock that always returns the same instant.
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock pinned to the given RFC 3339 instant.
    ///
    /// # Panics
    ///
    /// Panics if the timestamp does not parse; fakes fail loudly rather
    /// than propagating configuration mistakes into test assertions.
    #[must_use]
    pub fn at(rfc3339: &str) -> Self {
        let instant = DateTime::parse_from_rfc3339(rfc3339)
            .expect("FixedClock::at requires a valid RFC 3339 timestamp")
            .with_timezone(&Utc);
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
