//! Rate limiting port.

use async_trait::async_trait;
use std::time::Duration;

/// Rate limiter trait - per-origin admission gate for post creation.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Decide whether `origin` may create a post now, recording the
    /// admission if so. Check and record happen atomically per call.
    async fn check(&self, origin: &str) -> Result<RateLimitResult, RateLimitError>;
}

/// Result of a rate limit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    pub allowed: bool,
    /// Time until the origin's current window closes.
    pub reset_after: Duration,
}

impl RateLimitResult {
    pub fn allowed(reset_after: Duration) -> Self {
        Self {
            allowed: true,
            reset_after,
        }
    }

    pub fn limited(reset_after: Duration) -> Self {
        Self {
            allowed: false,
            reset_after,
        }
    }
}

/// Rate limit errors.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Backend error: {0}")]
    Backend(String),
}
