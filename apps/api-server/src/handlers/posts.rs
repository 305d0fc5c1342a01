//! Journal post handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use journal_core::domain::PostDraft;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts
///
/// The body is shape-checked before anything touches storage.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let draft = PostDraft::from_json(&body)?;

    let post = state.posts.create_post(draft).await?;
    tracing::info!(post_id = post.id, category = %post.category, "Post created");

    Ok(HttpResponse::Created().json(post))
}
