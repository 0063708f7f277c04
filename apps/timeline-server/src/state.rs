//! Application state - shared across all handlers.

use std::sync::Arc;

use timeline_core::TimelineService;
use timeline_core::ports::{PostRepository, RateLimiter};
use timeline_infra::{DisabledRateLimiter, InMemoryPostRepository, InMemoryRateLimiter};

#[cfg(feature = "postgres")]
use anyhow::Context;
#[cfg(feature = "postgres")]
use timeline_infra::PostgresPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub timeline: TimelineService,
    pub trust_forwarded_for: bool,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        if config.testing {
            tracing::info!("Testing mode - rate limiting disabled, using in-memory store");
            return Ok(Self {
                trust_forwarded_for: config.trust_forwarded_for,
                ..Self::in_memory(Arc::new(DisabledRateLimiter))
            });
        }

        let limiter: Arc<dyn RateLimiter> = Arc::new(InMemoryRateLimiter::new());

        let posts: Arc<dyn PostRepository> = match &config.database {
            #[cfg(feature = "postgres")]
            Some(db_config) => {
                let conn = db_config
                    .connect()
                    .await
                    .context("failed to connect to database")?;
                Arc::new(PostgresPostRepository::new(conn))
            }
            #[cfg(not(feature = "postgres"))]
            Some(_) => {
                tracing::warn!(
                    "DATABASE_URL set but built without postgres feature. Posts will not survive a restart."
                );
                Arc::new(InMemoryPostRepository::new())
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Posts will not survive a restart.");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        if config.trust_forwarded_for {
            tracing::warn!("Rate limiting keyed on forwarded client address");
        }
        tracing::info!("Application state initialized");

        Ok(Self {
            timeline: TimelineService::new(posts, limiter),
            trust_forwarded_for: config.trust_forwarded_for,
        })
    }

    /// State backed by the in-memory store, keyed on the TCP peer.
    pub fn in_memory(limiter: Arc<dyn RateLimiter>) -> Self {
        Self {
            timeline: TimelineService::new(Arc::new(InMemoryPostRepository::new()), limiter),
            trust_forwarded_for: false,
        }
    }
}
