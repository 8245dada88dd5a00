use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode},
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::{
    error::ApiError,
    metrics,
    middleware::{cors, request_id, security_headers},
    state::ApiState,
    topic, word,
};

/// The route table: every method and path the API answers.
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health).fallback(method_not_allowed))
        .route("/health/ready", get(ready).fallback(method_not_allowed))
        .merge(topic::routes())
        .merge(word::routes())
        .fallback(handler_404)
}

/// The route table with state and the full middleware stack applied.
pub fn app(state: ApiState) -> Router {
    let environment = state.environment;

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let app = router()
        .with_state(state)
        .layer(middleware::from_fn(cors::short_circuit_options))
        .layer(cors::create_cors_layer())
        .layer(trace_layer)
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(middleware::from_fn(request_id::request_id_middleware));

    security_headers::apply_security_headers(app, environment)
}

/// Liveness, never touches the store
async fn health() -> StatusCode {
    StatusCode::OK
}

/// Readiness, checks the store is reachable
async fn ready(State(state): State<ApiState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready" }))),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": "Database unavailable" })),
            )
        }
    }
}

/// Unknown path: `405` for methods the API never serves, `404` otherwise
async fn handler_404(method: Method) -> ApiError {
    if [Method::GET, Method::POST, Method::DELETE].contains(&method) {
        ApiError::NotFound
    } else {
        ApiError::MethodNotAllowed
    }
}

/// Fallback for a known path hit with a method it does not support
pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
