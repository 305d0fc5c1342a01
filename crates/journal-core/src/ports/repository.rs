use async_trait::async_trait;

use crate::domain::{Post, PostDraft};
use crate::error::RepoError;

/// Post repository - the storage boundary for journal entries.
///
/// Posts are append-only: there is no update, delete or lookup by id.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Return every persisted post. No ordering is guaranteed.
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError>;

    /// Persist a draft, assigning its `id` and `created_at`.
    async fn create_post(&self, draft: PostDraft) -> Result<Post, RepoError>;
}
