// Request-ID and request-logging middleware placeholders.
// Both forward the request untouched for now.

use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Tag each request with an identifier.
pub async fn request_id(req: Request<Body>, next: Next) -> Response {
    // TODO: generate an x-request-id and carry it through the tracing span
    next.run(req).await
}

/// Log each request.
pub async fn request_logging(req: Request<Body>, next: Next) -> Response {
    next.run(req).await
}
