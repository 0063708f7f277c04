use async_trait::async_trait;

use crate::domain::{NewTimelinePost, PostId, TimelinePost};
use crate::error::RepoError;

/// Timeline post repository - the only writer of the persisted posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a validated post, assigning its id and creation time.
    async fn create(&self, post: NewTimelinePost) -> Result<TimelinePost, RepoError>;

    /// All posts, newest first; equal timestamps order by descending id.
    async fn list(&self) -> Result<Vec<TimelinePost>, RepoError>;

    /// Remove a post. Returns [`RepoError::NotFound`] if no such id exists.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;
}
