/// HTTP handlers for the post endpoints
pub mod posts;

use crate::error::AppError;
use actix_web::{web, HttpRequest};

// Re-export handler functions at module level
pub use posts::{create_post, delete_post, get_post, list_posts};

/// Route table for the post endpoints.
///
/// Shared between `main` and the integration tests so both serve the exact
/// same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .service(
                web::resource("")
                    .route(web::post().to(posts::create_post))
                    .route(web::get().to(posts::list_posts)),
            )
            .service(
                web::resource("/{post_id}")
                    .route(web::get().to(posts::get_post))
                    .route(web::delete().to(posts::delete_post)),
            ),
    );
}

/// JSON extractor configuration that shapes deserialization failures into the
/// service's `{"error": ...}` body instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: actix_web::error::JsonPayloadError, _req: &HttpRequest| {
        AppError::Validation(err.to_string()).into()
    })
}
