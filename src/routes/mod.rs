//! HTTP handlers of the REST backend.

use actix_web::{HttpResponse, error, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod api;

/// Header carrying the collection size, as json-server does.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Maps a service failure to the JSON error response sent to the caller.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({"error": "Blog not found"})),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(json!({"error": message}))
        }
        ServiceError::Internal(message) => {
            log::error!("Internal error: {message}");
            HttpResponse::InternalServerError().json(json!({"error": "Internal server error"}))
        }
    }
}

/// Rejects malformed JSON bodies with the same error shape as the handlers.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(json!({"error": err.to_string()}));
        error::InternalError::from_response(err, response).into()
    })
}

/// Rejects malformed window parameters with the same error shape as the handlers.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(json!({"error": err.to_string()}));
        error::InternalError::from_response(err, response).into()
    })
}

/// Registers the `/Blogs` resource handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(api::list_blogs)
        .service(api::show_blog)
        .service(api::create_blog)
        .service(api::update_blog)
        .service(api::delete_blog);
}
