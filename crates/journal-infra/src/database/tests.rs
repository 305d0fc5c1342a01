#[cfg(test)]
mod tests {
    use chrono::Utc;
    use journal_core::domain::PostDraft;
    use journal_core::error::RepoError;
    use journal_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    use crate::database::PostgresPostRepository;
    use crate::database::entity::post;

    fn model(id: i32, title: &str) -> post::Model {
        post::Model {
            id,
            title: title.to_owned(),
            excerpt: "Excerpt".to_owned(),
            category: "Wellness".to_owned(),
            image_url: String::new(),
            content: "Content".to_owned(),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_list_posts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "First"), model(2, "Second")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.list_posts().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[1].title, "Second");
    }

    #[tokio::test]
    async fn test_list_posts_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(repo.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_post_returns_stored_row() {
        let stored = model(7, "Test");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let post = repo
            .create_post(PostDraft {
                title: "Test".to_owned(),
                excerpt: "Excerpt".to_owned(),
                category: "Wellness".to_owned(),
                image_url: String::new(),
                content: "Content".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(post.id, 7);
        assert_eq!(post.title, "Test");
        assert_eq!(post.created_at, stored.created_at.with_timezone(&Utc));
    }

    #[tokio::test]
    async fn test_storage_failure_maps_to_repo_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "relation \"posts\" does not exist".to_owned(),
            ))])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.list_posts().await;
        assert!(matches!(result, Err(RepoError::Query(_))));
    }

    fn draft() -> PostDraft {
        PostDraft {
            title: "Test".to_owned(),
            excerpt: "Excerpt".to_owned(),
            category: "Wellness".to_owned(),
            image_url: String::new(),
            content: "Content".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_create_post_constraint_violation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"posts_pkey\"".to_owned(),
            ))])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.create_post(draft()).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_create_post_connection_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Conn(RuntimeErr::Internal(
                "connection refused".to_owned(),
            ))])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.create_post(draft()).await;
        assert!(matches!(result, Err(RepoError::Connection(_))));
    }

    #[tokio::test]
    async fn test_list_posts_connection_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Conn(RuntimeErr::Internal(
                "connection refused".to_owned(),
            ))])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.list_posts().await;
        assert!(matches!(result, Err(RepoError::Connection(_))));
    }
}
