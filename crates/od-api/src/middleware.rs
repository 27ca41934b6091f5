//! opsdesk/crates/od-api/src/middleware.rs
//!
//! Request logging and CORS for the JSON API.

use actix_cors::Cors;
use actix_web::middleware::Logger;

// Returns a standard set of middleware for the OpsDesk API.
pub fn standard_middleware() -> Logger {
    // The 'default' logger outputs:
    // remote-ip "request-line" status-code response-size "referrer" "user-agent"
    Logger::default()
}

// Configures CORS (Cross-Origin Resource Sharing).
// The console UI may be served from a different origin than the API.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .max_age(3600)
}
