//! Route table for the public API.

/// Route prefix for every API endpoint.
pub const API_SCOPE: &str = "/api";

/// Posts collection - `GET` lists, `POST` creates.
pub const POSTS: &str = "/posts";

/// Liveness probe.
pub const HEALTH: &str = "/health";

/// Full path of the posts collection.
pub const POSTS_PATH: &str = "/api/posts";

/// Full path of the health endpoint.
pub const HEALTH_PATH: &str = "/api/health";
