use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info};

/// Header stamped on every API response with the crate version
pub const VERSION_HEADER: &str = "X-Fyora-Authorizer-Version";

/// Request processing middleware hook
///
/// Logs the inbound request and how long the handler chain took. Request
/// headers are not logged since they carry bearer tokens.
pub async fn request_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    info!(
        "REQUEST MIDDLEWARE: Processing incoming {} request to {}",
        method, uri
    );

    let response = next.run(request).await;

    debug!(
        "REQUEST MIDDLEWARE: {} {} processed in {:?}",
        method,
        uri,
        start.elapsed()
    );

    response
}

/// Response processing middleware hook
pub async fn response_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;

    response.headers_mut().insert(
        VERSION_HEADER,
        HeaderValue::from_static(env!("CARGO_PKG_VERSION")),
    );

    debug!(
        "RESPONSE MIDDLEWARE: Responding with status {}",
        response.status()
    );

    response
}
