use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub mod error;
pub mod handlers;
pub mod middleware_hooks;
pub mod models;
pub mod server;


// Re-export server functions for convenience
pub use server::{start_server_with_config, ApiConfig};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub authorizer: Arc<authz::Authorizer>,
}

impl AppState {
    pub fn new(authorizer: authz::Authorizer) -> Self {
        Self {
            authorizer: Arc::new(authorizer),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::authorize::authorize,
        handlers::health::health_check,
    ),
    components(
        schemas(
            models::GatewayEvent,
            models::HealthResponse,
            authz::types::AuthorizerResponse,
            authz::types::PolicyDocument,
            authz::types::Statement,
            authz::types::Effect,
            error::ApiErrorResponse,
            error::ErrorDetail,
        )
    ),
    tags(
        (name = "authorizer", description = "Gateway request authorization"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Fyora Authorizer API",
        version = "1.0.0",
        description = "Bearer token authorizer for the Fyora API gateway",
    ),
)]
pub struct ApiDoc;

/// Create the main API router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let api_v1 = Router::new()
        .route("/authorize", post(handlers::authorize::authorize))
        .route("/health", get(handlers::health::health_check))
        .route("/openapi.json", get(handlers::openapi_json))
        .layer(middleware::from_fn(middleware_hooks::request_middleware))
        .layer(middleware::from_fn(middleware_hooks::response_middleware));

    Router::new()
        .nest("/api/v1", api_v1)
        .fallback(handlers::not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
