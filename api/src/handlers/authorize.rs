use axum::{body::Bytes, extract::State, Json};
use authz::{
    error::AuthzError,
    types::{AuthorizerResponse, PolicyDecision},
};
use serde_json::Value;
use tracing::debug;

use crate::AppState;

/// Authorize a gateway event
///
/// POST /api/v1/authorize
///
/// Always answers 200 with a policy response. Denials, including bodies that
/// are not JSON, are reported in `errorMessage` rather than the HTTP status so
/// the gateway always receives a well formed policy.
#[utoipa::path(
    post,
    path = "/api/v1/authorize",
    request_body = crate::models::GatewayEvent,
    responses(
        (status = 200, description = "Policy decision for the event", body = AuthorizerResponse)
    ),
    tag = "authorizer"
)]
pub async fn authorize(State(state): State<AppState>, body: Bytes) -> Json<AuthorizerResponse> {
    debug!("AUTHORIZE: Received event of {} bytes", body.len());

    let decision = match serde_json::from_slice::<Value>(&body) {
        Ok(event) => state.authorizer.authorize_event(&event),
        Err(e) => PolicyDecision::fault(AuthzError::MalformedRequest(e.to_string())),
    };

    Json(AuthorizerResponse::from(decision))
}
