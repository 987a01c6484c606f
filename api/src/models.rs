use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Gateway authorizer event as documented in the OpenAPI schema.
///
/// The handler reads the raw JSON so that malformed events can still be
/// answered with a Deny; this type only describes the accepted shape.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GatewayEvent {
    /// Request headers, names case-sensitive
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}
