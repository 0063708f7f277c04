use std::time::Duration;

use async_trait::async_trait;

use timeline_core::ports::{RateLimitError, RateLimitResult, RateLimiter};

/// Rate limiter that admits everything. Selected in testing mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRateLimiter;

#[async_trait]
impl RateLimiter for DisabledRateLimiter {
    async fn check(&self, _origin: &str) -> Result<RateLimitResult, RateLimitError> {
        Ok(RateLimitResult::allowed(Duration::ZERO))
    }
}
