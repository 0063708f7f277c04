//! In-memory per-origin rate limiter.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use timeline_core::ports::{Clock, RateLimitError, RateLimitResult, RateLimiter};

use crate::clock::SystemClock;

/// Each origin gets at most one admission per window.
pub const ADMISSION_WINDOW: Duration = Duration::from_secs(60);

/// In-memory rate limiter keeping the last admission time per origin.
///
/// Entries are pruned lazily on every check, so memory is bounded by the
/// number of origins seen within one window. State is per-process and is
/// lost on restart.
pub struct InMemoryRateLimiter {
    admitted: Mutex<HashMap<String, DateTime<Utc>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryRateLimiter {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            admitted: Mutex::new(HashMap::new()),
            clock,
        }
    }

    #[cfg(test)]
    async fn tracked_origins(&self) -> usize {
        self.admitted.lock().await.len()
    }
}

impl Default for InMemoryRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Age of an admission at `now`. A clock that stepped backwards counts as
/// zero elapsed time.
fn age(admitted_at: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    now.signed_duration_since(admitted_at)
        .to_std()
        .unwrap_or(Duration::ZERO)
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, origin: &str) -> Result<RateLimitResult, RateLimitError> {
        // Prune, lookup and record under one lock so racing requests from the
        // same origin cannot both be admitted.
        let mut admitted = self.admitted.lock().await;
        let now = self.clock.now();

        let before = admitted.len();
        admitted.retain(|_, at| age(*at, now) < ADMISSION_WINDOW);
        let pruned = before - admitted.len();
        if pruned > 0 {
            tracing::debug!(pruned, "Pruned expired rate limit entries");
        }

        if let Some(at) = admitted.get(origin) {
            let reset_after = ADMISSION_WINDOW.saturating_sub(age(*at, now));
            return Ok(RateLimitResult::limited(reset_after));
        }

        admitted.insert(origin.to_owned(), now);
        Ok(RateLimitResult::allowed(ADMISSION_WINDOW))
    }
}
