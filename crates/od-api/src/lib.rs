//! # od-api
//!
//! The web routing and orchestration layer for OpsDesk.

pub mod error;
pub mod handlers;
pub mod middleware;

use actix_web::web;

/// Configures the routes for the management console API.
///
/// # Developer Note
/// We use a scoped configuration to allow the main binary to mount
/// the API under different paths if needed (e.g., /api/v1/).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Extractor failures must answer with the same JSON error body as
    // the handlers, not actix's plain-text default
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| error::validation_error(err)))
        .app_data(web::JsonConfig::default().error_handler(|err, _req| error::validation_error(err)))
        .service(
        web::scope("")
            .service(
                web::resource("/links")
                    .route(web::get().to(handlers::list_links))
                    .route(web::post().to(handlers::create_link))
                    .route(web::delete().to(handlers::delete_link)),
            )
            .service(
                web::resource("/pcs")
                    .route(web::get().to(handlers::list_pcs))
                    .route(web::post().to(handlers::create_pc))
                    .route(web::put().to(handlers::update_pc))
                    .route(web::delete().to(handlers::delete_pc)),
            )
            .service(
                web::resource("/todos")
                    .route(web::get().to(handlers::list_todos))
                    .route(web::post().to(handlers::create_todo))
                    .route(web::put().to(handlers::update_todo))
                    .route(web::delete().to(handlers::delete_todo)),
            )
            .service(
                web::resource("/categories")
                    .route(web::get().to(handlers::list_categories))
                    .route(web::post().to(handlers::create_category))
                    .route(web::put().to(handlers::update_category))
                    .route(web::delete().to(handlers::delete_category)),
            )
            .service(
                web::resource("/departments")
                    .route(web::get().to(handlers::list_departments))
                    .route(web::post().to(handlers::create_department))
                    .route(web::put().to(handlers::update_department))
                    .route(web::delete().to(handlers::delete_department)),
            )
            // Any unmatched path answers with the legacy 404 body
            .default_service(web::route().to(handlers::invalid_endpoint)),
    );
}
