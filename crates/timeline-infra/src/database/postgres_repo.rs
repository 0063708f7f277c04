//! PostgreSQL post repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbConn, DbErr, EntityTrait, NotSet, QueryOrder, Set,
    TransactionTrait,
};

use timeline_core::domain::{NewTimelinePost, PostId, TimelinePost};
use timeline_core::error::RepoError;
use timeline_core::ports::{Clock, PostRepository};

use super::entity::timeline_post::{self, Entity as TimelinePostEntity};
use crate::clock::SystemClock;

/// PostgreSQL post repository.
///
/// Ids come from the table's `BIGSERIAL` sequence. Inserts hold a table lock
/// that blocks other writers, so the sequence value and the timestamp are
/// assigned together and `created_at` never decreases as ids grow, even
/// across server instances with skewed clocks.
pub struct PostgresPostRepository {
    pub(crate) db: DbConn,
    clock: Arc<dyn Clock>,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self::with_clock(db, Arc::new(SystemClock))
    }

    pub fn with_clock(db: DbConn, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }
}

/// Readers are not blocked; concurrent inserts queue behind the holder.
const LOCK_FOR_INSERT: &str = "LOCK TABLE timeline_posts IN SHARE ROW EXCLUSIVE MODE";

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewTimelinePost) -> Result<TimelinePost, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        txn.execute_unprepared(LOCK_FOR_INSERT)
            .await
            .map_err(map_db_err)?;

        let latest = TimelinePostEntity::find()
            .order_by_desc(timeline_post::Column::CreatedAt)
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        let now = self.clock.now();
        let created_at = latest.map_or(now, |row| now.max(row.created_at.into()));

        let (name, email, content) = post.into_parts();
        let model = timeline_post::ActiveModel {
            id: NotSet,
            name: Set(name),
            email: Set(email),
            content: Set(content),
            created_at: Set(created_at.into()),
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(id = model.id, "Inserted timeline post");
        Ok(model.into())
    }

    async fn list(&self) -> Result<Vec<TimelinePost>, RepoError> {
        let result = TimelinePostEntity::find()
            .order_by_desc(timeline_post::Column::CreatedAt)
            .order_by_desc(timeline_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let result = TimelinePostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(id, "Deleted timeline post");
        Ok(())
    }
}
