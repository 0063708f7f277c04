//! HTTP handlers and route configuration.

mod health;
mod timeline;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Both list paths serve the same envelope
            .route("/timeline_post", web::post().to(timeline::create_post))
            .route("/timeline_post", web::get().to(timeline::list_posts))
            .route("/timeline_posts", web::get().to(timeline::list_posts))
            .route("/timeline_post/{id}", web::delete().to(timeline::delete_post)),
    );
}
