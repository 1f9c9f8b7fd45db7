//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(posts::FORM_LIMIT))
        .route("/", web::get().to(posts::index))
        .route("/add_post", web::post().to(posts::add_post))
        .route("/view_posts", web::get().to(posts::view_posts))
        .route("/update_post/{id}", web::post().to(posts::update_post))
        .route("/delete_post/{id}", web::post().to(posts::delete_post))
        .route("/health", web::get().to(health::health_check));
}
