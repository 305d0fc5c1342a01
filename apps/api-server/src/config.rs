//! Application configuration loaded from environment variables.

use std::env;

use journal_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Insert the demo posts on startup when the store is empty.
    pub seed_demo_posts: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_or(env::var("DB_MAX_CONNECTIONS").ok(), 10),
            min_connections: parse_or(env::var("DB_MIN_CONNECTIONS").ok(), 1),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or(env::var("PORT").ok(), 5000),
            database,
            seed_demo_posts: parse_flag(env::var("SEED_DEMO_POSTS").ok(), true),
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// `false`, `0`, `no` and `off` disable a flag; anything else enables it.
fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value {
        Some(v) => !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off"),
        None => default,
    }
}
