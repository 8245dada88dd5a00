use axum::{Router, routing::get};
use vocab_api::{bootstrap, config::ApiConfig, metrics, state::ApiState};
use vocab_db::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    vocab_api::tracing::init_tracing(config.env)?;

    let metrics_handle = metrics::init_metrics()?;
    tracing::info!("Prometheus metrics exporter initialized");

    // The store is owned here and injected into the router state. The pool
    // connects on first use, an unreachable database only fails requests.
    let store = Store::connect(&config.database_url, config.db_max_connections)?;
    bootstrap::prepare_store(&store).await;

    let state = ApiState::new(store, config.env);

    // Metrics endpoint stays outside the API middleware stack
    let metrics_app = Router::new()
        .route("/metrics", get(metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = vocab_api::router::app(state).merge(metrics_app);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(address = %listener.local_addr()?, environment = ?config.env, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
