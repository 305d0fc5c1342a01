//! Application state - shared across all handlers.

use std::sync::Arc;

use journal_core::ports::PostRepository;
use journal_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use anyhow::Context;
#[cfg(feature = "postgres")]
use journal_infra::{DatabasePool, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state, picking the repository from configuration.
    ///
    /// Without a database URL the in-memory repository is used. A configured
    /// database that cannot be reached is a startup error.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        if let Some(config) = db_config {
            let pool = DatabasePool::init(config)
                .await
                .context("failed to connect to the posts database")?;
            tracing::info!("Application state initialized (postgres)");
            return Ok(Self::with_repository(Arc::new(
                PostgresPostRepository::new(pool.conn),
            )));
        }

        #[cfg(not(feature = "postgres"))]
        if db_config.is_some() {
            tracing::warn!(
                "DATABASE_URL is set but the postgres feature is disabled. Running in-memory."
            );
            return Ok(Self::with_repository(Arc::new(InMemoryPostRepository::new())));
        }

        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        Ok(Self::with_repository(Arc::new(InMemoryPostRepository::new())))
    }

    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
