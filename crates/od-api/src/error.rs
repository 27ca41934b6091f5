//! Maps `AppError` onto HTTP responses.
//!
//! The legacy API collapsed every failure into a bare 500; we surface
//! distinct status codes per error kind instead (validation 400, not
//! found 404, storage 500) while keeping the `{"error": ...}` body
//! shape. Storage detail is logged server-side, never leaked.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use od_core::AppError;
use std::fmt;

#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Converts an extractor failure (bad query string, malformed JSON
/// body) into the same `{"error": ...}` shape the handlers produce.
pub fn validation_error(err: impl fmt::Display) -> actix_web::Error {
    ApiError(AppError::Validation(err.to_string())).into()
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            AppError::NotFound(..) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match &self.0 {
            AppError::Storage(detail) => {
                log::error!("storage failure: {detail}");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}
