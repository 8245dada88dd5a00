//! Prometheus metrics for monitoring API performance and health.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use regex::Regex;
use std::{sync::LazyLock, time::Instant};
use vocab_db::DbError;

static ID_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(/api/(?:topics|words))/[^/]+/?$").expect("static regex is valid")
});

const KNOWN_PATHS: &[&str] = &[
    "/api/topics",
    "/api/words",
    "/health",
    "/health/ready",
    "/metrics",
];

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let builder = PrometheusBuilder::new();

    // Configure histogram buckets for request duration (in seconds)
    let builder = builder.set_buckets_for_metric(
        Matcher::Full("http_request_duration_seconds".to_string()),
        &[
            0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ],
    )?;

    let handle = builder.install_recorder()?;

    Ok(handle)
}

/// Middleware to record HTTP request metrics
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = normalize_path(req.uri().path());

    let in_flight = gauge!("http_requests_in_flight", "method" => method.clone(), "path" => path.clone());
    in_flight.increment(1.0);

    let response = next.run(req).await;

    in_flight.decrement(1.0);

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(duration);

    response
}

/// Normalize URL paths to reduce cardinality in metrics.
///
/// Topic and word ids become `:id`; paths that match no route collapse into
/// a single `unmatched` label.
fn normalize_path(path: &str) -> String {
    if KNOWN_PATHS.contains(&path) {
        return path.to_string();
    }

    if ID_SEGMENT.is_match(path) {
        return ID_SEGMENT.replace(path, "$1/:id").into_owned();
    }

    "unmatched".to_string()
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}

/// Record database query metrics
pub fn record_db_query(query_name: &str, duration_secs: f64, success: bool) {
    let status = if success { "success" } else { "error" };

    counter!(
        "db_queries_total",
        "query" => query_name.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "db_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}

/// Await a store call and record its duration and outcome
pub async fn timed_query<T, F>(query_name: &str, query: F) -> Result<T, DbError>
where
    F: Future<Output = Result<T, DbError>>,
{
    let start = Instant::now();
    let result = query.await;
    record_db_query(query_name, start.elapsed().as_secs_f64(), result.is_ok());
    result
}
