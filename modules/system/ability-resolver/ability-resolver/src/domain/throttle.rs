//! Time-based log throttling.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Lets one log line through per `interval`.
///
/// Used for warnings that could otherwise fire on every request while a
/// collaborator is down.
#[derive(Debug)]
pub struct ThrottledLog {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl ThrottledLog {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// Returns `true` if the caller should emit its log line now.
    #[must_use]
    pub fn should_log(&self) -> bool {
        let now = Instant::now();
        let mut last = self.last.lock();
        match *last {
            Some(prev) if now.duration_since(prev) < self.interval => false,
            _ => {
                *last = Some(now);
                true
            }
        }
    }
}
