//! Clock adapters.
//!
//! [`SystemClock`] is used in production. [`MockClock`] is a controllable
//! clock for tests, available in this crate's test builds and to other crates
//! through the `test-helpers` feature.

use chrono::{DateTime, Utc};

use timeline_core::ports::Clock;

/// System clock implementation using `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(any(test, feature = "test-helpers"))]
pub use mock::MockClock;

#[cfg(any(test, feature = "test-helpers"))]
mod mock {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use chrono::{DateTime, Utc};

    use timeline_core::ports::Clock;

    /// Mock clock for testing.
    ///
    /// Clones share the same underlying time, so advancing one advances all.
    #[derive(Debug, Clone)]
    pub struct MockClock {
        current: Arc<Mutex<DateTime<Utc>>>,
    }

    impl MockClock {
        pub fn new(start: DateTime<Utc>) -> Self {
            Self {
                current: Arc::new(Mutex::new(start)),
            }
        }

        pub fn advance(&self, duration: Duration) {
            let mut current = self.current.lock().expect("MockClock mutex poisoned");
            *current += duration;
        }

        pub fn set(&self, instant: DateTime<Utc>) {
            *self.current.lock().expect("MockClock mutex poisoned") = instant;
        }
    }

    impl Default for MockClock {
        fn default() -> Self {
            Self::new(Utc::now())
        }
    }

    impl Clock for MockClock {
        fn now(&self) -> DateTime<Utc> {
            *self.current.lock().expect("MockClock mutex poisoned")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_mock_clock_shared_between_clones() {
        let start = Utc::now();
        let clock = MockClock::new(start);
        let other = clock.clone();

        other.advance(Duration::from_secs(5));

        assert_eq!(clock.now(), start + Duration::from_secs(5));
    }
}
