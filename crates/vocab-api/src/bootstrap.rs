//! One-time store preparation at process start.

use vocab_db::Store;

/// Create the schema and seed the sample topic when the store is empty.
///
/// Both steps are best-effort: failures are logged and the process keeps
/// running, requests will then surface the store errors as `500`s.
pub async fn prepare_store(store: &Store) {
    match store.init_schema().await {
        Ok(()) => tracing::info!("Database schema initialized"),
        Err(e) => tracing::error!(error = %e, "Database schema initialization failed"),
    }

    match store.ensure_sample_data().await {
        Ok(true) => tracing::info!(topic = vocab_db::SAMPLE_TOPIC, "Sample data created"),
        Ok(false) => tracing::debug!("Topics already present, skipping sample data"),
        Err(e) => tracing::error!(error = %e, "Failed to create sample data"),
    }
}
