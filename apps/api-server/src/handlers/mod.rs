//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::{HttpRequest, error, web};
use journal_shared::routes;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope(routes::API_SCOPE)
                .route(routes::HEALTH, web::get().to(health::health_check))
                .service(
                    web::resource(routes::POSTS)
                        .route(web::get().to(posts::list_posts))
                        .route(web::post().to(posts::create_post)),
                ),
        );
}

/// Unparseable or non-JSON bodies are reported like any other validation failure.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}
