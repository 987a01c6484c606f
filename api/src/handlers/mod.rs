use axum::{http::Uri, Json};
use utoipa::OpenApi;

use crate::{error::ApiError, ApiDoc};

pub mod authorize;
pub mod health;

/// Serve the OpenAPI document
///
/// GET /api/v1/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
