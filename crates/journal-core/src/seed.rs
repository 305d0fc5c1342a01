//! One-time demo content for an empty journal.

use crate::domain::PostDraft;
use crate::error::RepoError;
use crate::ports::PostRepository;

/// The fixed demo entries inserted into an empty store, in insertion order.
pub fn demo_posts() -> Vec<PostDraft> {
    vec![
        PostDraft {
            title: "5 Trimmers Under ₹1000 That Actually Last".to_string(),
            excerpt: "We tested 20 different models so you don't have to.".to_string(),
            category: "Grooming".to_string(),
            image_url: "https://images.unsplash.com/photo-1621600411688-4be93cd68504?auto=format&fit=crop&q=80&w=800".to_string(),
            content: "Full review content here...".to_string(),
        },
        PostDraft {
            title: "The Minimalist's Guide to Wardrobe Essentials".to_string(),
            excerpt: "Building a capsule wardrobe with just 10 items.".to_string(),
            category: "Lifestyle".to_string(),
            image_url: "https://images.unsplash.com/photo-1489987707025-afc232f7ea0f?auto=format&fit=crop&q=80&w=800".to_string(),
            content: "Full guide content here...".to_string(),
        },
        PostDraft {
            title: "Morning Rituals for a Zen Start".to_string(),
            excerpt: "How to structure your first hour for maximum productivity.".to_string(),
            category: "Wellness".to_string(),
            image_url: "https://images.unsplash.com/photo-1506126613408-eca07ce68773?auto=format&fit=crop&q=80&w=800".to_string(),
            content: "Full content here...".to_string(),
        },
    ]
}

/// Insert the demo posts if the store is empty.
///
/// Returns the number of posts inserted (0 or 3). Called once at startup.
pub async fn seed_if_empty(repo: &dyn PostRepository) -> Result<usize, RepoError> {
    let existing = repo.list_posts().await?;
    if !existing.is_empty() {
        tracing::debug!(existing = existing.len(), "Store not empty, skipping seed");
        return Ok(0);
    }

    let drafts = demo_posts();
    let count = drafts.len();
    for draft in drafts {
        repo.create_post(draft).await?;
    }

    tracing::info!(count, "Seeded demo posts");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::domain::Post;

    #[derive(Default)]
    struct RecordingRepository {
        posts: Mutex<Vec<Post>>,
    }

    #[async_trait]
    impl PostRepository for RecordingRepository {
        async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
            Ok(self.posts.lock().unwrap().clone())
        }

        async fn create_post(&self, draft: PostDraft) -> Result<Post, RepoError> {
            let mut posts = self.posts.lock().unwrap();
            let post = Post::from_draft(posts.len() as i32 + 1, Utc::now(), draft);
            posts.push(post.clone());
            Ok(post)
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl PostRepository for FailingRepository {
        async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
            Err(RepoError::Connection("refused".to_string()))
        }

        async fn create_post(&self, _draft: PostDraft) -> Result<Post, RepoError> {
            Err(RepoError::Connection("refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_seeds_empty_store() {
        let repo = RecordingRepository::default();

        let inserted = seed_if_empty(&repo).await.unwrap();
        assert_eq!(inserted, 3);

        let posts = repo.list_posts().await.unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "5 Trimmers Under ₹1000 That Actually Last",
                "The Minimalist's Guide to Wardrobe Essentials",
                "Morning Rituals for a Zen Start",
            ]
        );
        let categories: Vec<&str> = posts.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(categories, vec!["Grooming", "Lifestyle", "Wellness"]);
    }

    #[tokio::test]
    async fn test_skips_non_empty_store() {
        let repo = RecordingRepository::default();
        repo.create_post(demo_posts().remove(1)).await.unwrap();

        let inserted = seed_if_empty(&repo).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(repo.list_posts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_propagates_storage_failure() {
        let result = seed_if_empty(&FailingRepository).await;
        assert!(matches!(result, Err(RepoError::Connection(_))));
    }
}
