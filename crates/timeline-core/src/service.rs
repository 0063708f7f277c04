//! Timeline use cases.
//!
//! A creation passes the validator first, then the rate limiter, and only
//! then reaches the repository. A rejected submission leaves the origin's
//! window untouched.

use std::sync::Arc;

use crate::domain::{PostDraft, PostId, TimelinePost};
use crate::error::{RepoError, TimelineError};
use crate::ports::{PostRepository, RateLimiter};
use crate::validation;

/// Entry point for the timeline: create, list and delete posts.
#[derive(Clone)]
pub struct TimelineService {
    posts: Arc<dyn PostRepository>,
    limiter: Arc<dyn RateLimiter>,
}

impl TimelineService {
    pub fn new(posts: Arc<dyn PostRepository>, limiter: Arc<dyn RateLimiter>) -> Self {
        Self { posts, limiter }
    }

    /// Create a post on behalf of `origin`.
    pub async fn create(
        &self,
        origin: &str,
        draft: PostDraft,
    ) -> Result<TimelinePost, TimelineError> {
        let post = validation::validate(draft).inspect_err(|e| {
            tracing::debug!(%origin, field = e.field(), "Timeline post rejected");
        })?;

        match self.limiter.check(origin).await {
            Ok(result) if !result.allowed => {
                tracing::warn!(%origin, retry_after = ?result.reset_after, "Timeline post rate limited");
                return Err(TimelineError::RateLimited {
                    retry_after: result.reset_after,
                });
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(%origin, error = %e, "Rate limiter error, failing open");
            }
        }

        let created = self.posts.create(post).await.map_err(TimelineError::Storage)?;
        tracing::info!(id = created.id, %origin, "Timeline post created");
        Ok(created)
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<TimelinePost>, TimelineError> {
        self.posts.list().await.map_err(TimelineError::Storage)
    }

    /// Delete a post by id.
    pub async fn delete(&self, id: PostId) -> Result<(), TimelineError> {
        match self.posts.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "Timeline post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(TimelineError::NotFound(id)),
            Err(e) => Err(TimelineError::Storage(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewTimelinePost;
    use crate::error::ValidationError;
    use crate::ports::{RateLimitError, RateLimitResult};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct FakeRepo {
        posts: Mutex<Vec<TimelinePost>>,
        creates: AtomicUsize,
        broken: bool,
    }

    #[async_trait]
    impl PostRepository for FakeRepo {
        async fn create(&self, post: NewTimelinePost) -> Result<TimelinePost, RepoError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            if self.broken {
                return Err(RepoError::Connection("refused".to_string()));
            }
            let mut posts = self.posts.lock().unwrap();
            let post = post.into_post(posts.len() as PostId + 1, Utc::now());
            posts.push(post.clone());
            Ok(post)
        }

        async fn list(&self) -> Result<Vec<TimelinePost>, RepoError> {
            if self.broken {
                return Err(RepoError::Query("timeout".to_string()));
            }
            Ok(self.posts.lock().unwrap().iter().rev().cloned().collect())
        }

        async fn delete(&self, id: PostId) -> Result<(), RepoError> {
            let mut posts = self.posts.lock().unwrap();
            let before = posts.len();
            posts.retain(|p| p.id != id);
            if posts.len() == before {
                return Err(RepoError::NotFound);
            }
            Ok(())
        }
    }

    enum FakeLimiter {
        Allow,
        Deny,
        Broken,
    }

    #[async_trait]
    impl RateLimiter for FakeLimiter {
        async fn check(&self, _origin: &str) -> Result<RateLimitResult, RateLimitError> {
            match self {
                Self::Allow => Ok(RateLimitResult::allowed(Duration::from_secs(60))),
                Self::Deny => Ok(RateLimitResult::limited(Duration::from_secs(42))),
                Self::Broken => Err(RateLimitError::Backend("down".to_string())),
            }
        }
    }

    fn service(repo: Arc<FakeRepo>, limiter: FakeLimiter) -> TimelineService {
        TimelineService::new(repo, Arc::new(limiter))
    }

    #[tokio::test]
    async fn test_invalid_draft_reported_before_rate_limit() {
        let repo = Arc::new(FakeRepo::default());
        let service = service(repo.clone(), FakeLimiter::Deny);

        let err = service.create("10.0.0.1", PostDraft::default()).await.unwrap_err();

        assert!(matches!(
            err,
            TimelineError::Validation(ValidationError::InvalidName)
        ));
    }

    #[tokio::test]
    async fn test_rate_limited_post_never_reaches_storage() {
        let repo = Arc::new(FakeRepo::default());
        let service = service(repo.clone(), FakeLimiter::Deny);

        let err = service
            .create("10.0.0.1", PostDraft::new("Alice", "alice@x.com", "hi"))
            .await
            .unwrap_err();

        match err {
            TimelineError::RateLimited { retry_after } => {
                assert_eq!(retry_after, Duration::from_secs(42));
            }
            other => panic!("expected rate limit, got {other:?}"),
        }
        assert_eq!(repo.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_storage() {
        let repo = Arc::new(FakeRepo::default());
        let service = service(repo.clone(), FakeLimiter::Allow);

        let err = service
            .create("10.0.0.1", PostDraft::new("Alice", "alice@x.com", " "))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TimelineError::Validation(ValidationError::InvalidContent)
        ));
        assert_eq!(repo.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_limiter_failure_fails_open() {
        let repo = Arc::new(FakeRepo::default());
        let service = service(repo.clone(), FakeLimiter::Broken);

        let post = service
            .create("10.0.0.1", PostDraft::new("Alice", "alice@x.com", "hi"))
            .await
            .unwrap();

        assert_eq!(post.id, 1);
    }

    #[tokio::test]
    async fn test_storage_failure_is_distinct() {
        let repo = Arc::new(FakeRepo {
            broken: true,
            ..Default::default()
        });
        let service = service(repo, FakeLimiter::Allow);

        let err = service
            .create("10.0.0.1", PostDraft::new("Alice", "alice@x.com", "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, TimelineError::Storage(RepoError::Connection(_))));

        let err = service.list().await.unwrap_err();
        assert!(matches!(err, TimelineError::Storage(RepoError::Query(_))));
    }

    #[tokio::test]
    async fn test_delete_reports_not_found() {
        let repo = Arc::new(FakeRepo::default());
        let service = service(repo, FakeLimiter::Allow);
        let post = service
            .create("10.0.0.1", PostDraft::new("Alice", "alice@x.com", "hi"))
            .await
            .unwrap();

        service.delete(post.id).await.unwrap();

        let err = service.delete(post.id).await.unwrap_err();
        assert!(matches!(err, TimelineError::NotFound(id) if id == post.id));
        assert!(service.list().await.unwrap().is_empty());
    }
}
