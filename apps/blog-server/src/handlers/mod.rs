//! HTTP handlers and route configuration.

mod posts;

use actix_web::web;

use crate::middleware::error::{AppError, no_route};

/// Configure all application routes.
///
/// Only `GET /` and `GET /<id>/` exist; anything else, including other
/// methods on those paths, answers 404.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, req| {
        tracing::debug!(path = %req.path(), "Unusable path segment: {}", err);
        AppError::NoRoute(req.path().to_string()).into()
    }))
    .service(
        web::resource("/")
            .name("post-list")
            .route(web::get().to(posts::list))
            .default_service(web::to(no_route)),
    )
    .service(
        web::resource("/{id:[0-9]+}/")
            .name("post-detail")
            .route(web::get().to(posts::detail))
            .default_service(web::to(no_route)),
    );
}
