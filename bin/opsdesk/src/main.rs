//! # OpsDesk Binary
//!
//! The entry point that assembles the application: both storage
//! backends are constructed explicitly here and handed to the API
//! layer, and the starter dataset is applied once before the server
//! starts accepting requests.

use actix_web::{web, App, HttpServer};
use od_api::handlers::AppState;
use od_api::{configure_routes, middleware};
use od_core::seed;
use od_store_json::JsonStore;
use od_store_sqlite::SqliteStore;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:opsdesk.db".to_string());
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    // 1. Initialize the default (SQLite) backend and seed it once
    let sqlite = SqliteStore::connect(&database_url)
        .await
        .expect("Failed to init SQLite store");
    seed::seed_provider(&sqlite)
        .await
        .expect("Failed to seed database");

    // 2. Initialize the flat-file backend; it bootstraps itself from
    //    DATA_DIR/initial on first read
    let json = JsonStore::new(PathBuf::from(data_dir));

    // 3. Wrap in AppState (dynamic dispatch so handlers stay backend-agnostic)
    let state = web::Data::new(AppState {
        sqlite: Arc::new(sqlite),
        json: Arc::new(json),
    });

    log::info!("opsdesk listening on http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::standard_middleware())
            .wrap(middleware::cors_policy())
            .configure(configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
