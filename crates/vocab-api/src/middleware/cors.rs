use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::CorsLayer;

/// Creates the CORS layer for the API
///
/// Any origin is accepted (the request origin is mirrored back) and
/// credentials are allowed. Real preflights are answered by the layer itself.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Answer every `OPTIONS` request with an empty `200`, whether or not it
/// carries preflight headers, before it reaches the route table.
pub async fn short_circuit_options(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    next.run(req).await
}
