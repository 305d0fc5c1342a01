//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait};

use journal_core::domain::{Post, PostDraft};
use journal_core::error::RepoError;
use journal_core::ports::PostRepository;

use super::entity::post::{ActiveModel, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(err) => RepoError::Connection(err.to_string()),
        DbErr::ConnectionAcquire(err) => RepoError::Connection(err.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("violates") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find().all(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(count = result.len(), "Listed posts");
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create_post(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let active_model: ActiveModel = draft.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Created post");
        Ok(model.into())
    }
}
