//! In-memory post store - used in testing mode and when no database is
//! configured. Data is lost on process restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use timeline_core::domain::{NewTimelinePost, PostId, TimelinePost};
use timeline_core::error::RepoError;
use timeline_core::ports::{Clock, PostRepository};

use crate::clock::SystemClock;

struct Store {
    next_id: PostId,
    last_created_at: Option<DateTime<Utc>>,
    posts: BTreeMap<PostId, TimelinePost>,
}

/// In-memory post repository.
///
/// Id assignment and timestamping happen under the write lock, so ids are
/// unique and `created_at` never decreases as ids grow.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
    clock: Arc<dyn Clock>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                last_created_at: None,
                posts: BTreeMap::new(),
            }),
            clock,
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewTimelinePost) -> Result<TimelinePost, RepoError> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let now = self.clock.now();
        let created_at = store.last_created_at.map_or(now, |last| last.max(now));
        store.last_created_at = Some(created_at);

        let post = post.into_post(id, created_at);
        store.posts.insert(id, post.clone());
        tracing::debug!(id, "Stored timeline post in memory");

        Ok(post)
    }

    async fn list(&self) -> Result<Vec<TimelinePost>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<TimelinePost> = store.posts.values().cloned().collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(posts)
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.posts.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}
