use axum::{response::IntoResponse, Json};
use chrono::Utc;
use tracing::info;

use crate::{error::ApiResult, models::HealthResponse};

/// Health check endpoint
///
/// GET /api/v1/health
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> ApiResult<impl IntoResponse> {
    info!("Health check requested");

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    };

    Ok(Json(response))
}
