//! HTTP route handlers exposing the entity services.

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod course;
pub mod enrollment;
pub mod learner;

/// 404 body shared by every handler.
pub(crate) fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"error": "not found"}))
}

/// 400 body for malformed inbound payloads.
pub(crate) fn validation_error(err: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({"error": err.to_string()}))
}

/// Maps service failures onto HTTP responses. Storage failures are logged
/// here at the boundary; expected outcomes are not.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => not_found(),
        ServiceError::Validation(msg) => HttpResponse::BadRequest().json(json!({"error": msg})),
        ServiceError::Conflict(msg) => HttpResponse::Conflict().json(json!({"error": msg})),
        ServiceError::Repository(err) => {
            log::error!("repository failure: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
