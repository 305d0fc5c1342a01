//! In-memory post repository - used when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use journal_core::domain::{Post, PostDraft};
use journal_core::error::RepoError;
use journal_core::ports::PostRepository;

struct Store {
    posts: Vec<Post>,
    next_id: i32,
}

/// In-memory post store using a Vec behind an async RwLock.
///
/// Ids are assigned sequentially from 1 under the write lock.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: Vec::new(),
                next_id: 1,
            }),
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
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.clone())
    }

    async fn create_post(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id = id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("post id sequence exhausted".to_string()))?;

        let post = Post::from_draft(id, Utc::now(), draft);
        store.posts.push(post.clone());

        tracing::debug!(post_id = id, "Created post in memory");
        Ok(post)
    }
}
