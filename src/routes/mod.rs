// Route exports
pub mod users;

use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::error::DirectoryError;
use crate::models::ErrorResponse;

pub use users::AppState;

/// Largest accepted JSON body
pub const JSON_LIMIT_BYTES: usize = 10 * 1024 * 1024;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(users::health_check))
        .service(web::scope("/api").configure(users::configure));
}

/// JSON extractor config: size limit and validation-style errors
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(handle_json_payload_error)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(handle_query_payload_error)
}

/// Handle JSON payload errors
fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    DirectoryError::validation(format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    DirectoryError::validation(format!("Invalid query: {}", err)).into()
}

/// Fallback for unknown routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "Route not found",
        format!("The route {} {} does not exist", req.method(), req.uri()),
    ))
}
