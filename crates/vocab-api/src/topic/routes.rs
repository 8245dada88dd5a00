use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{delete, get},
};
use serde_json::{Value, json};

use crate::{
    ApiState,
    error::ApiError,
    metrics::timed_query,
    router::method_not_allowed,
    validation::{self, TOPIC_NAME_REQUIRED},
};

use super::model::{CreateTopicRequest, TopicResponse, TopicsResponse};

/// Create the topic routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route(
            "/api/topics",
            get(list_topics)
                .post(create_topic)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/topics/{id}",
            delete(delete_topic).fallback(method_not_allowed),
        )
}

/// List all topics in creation order
async fn list_topics(State(state): State<ApiState>) -> Result<Json<TopicsResponse>, ApiError> {
    let topics = timed_query("list_topics", state.store.list_topics()).await?;

    Ok(Json(TopicsResponse { topics }))
}

/// Create a new topic
async fn create_topic(
    State(state): State<ApiState>,
    payload: Result<Json<CreateTopicRequest>, JsonRejection>,
) -> Result<Json<TopicResponse>, ApiError> {
    let Json(payload) = payload?;

    let name = validation::required(payload.name.as_deref(), TOPIC_NAME_REQUIRED)?;
    validation::validate_max_length("name", name)?;

    let topic = timed_query("create_topic", state.store.create_topic(name)).await?;
    tracing::info!(topic_id = %topic.id, "Topic created");

    Ok(Json(TopicResponse { topic }))
}

/// Delete a topic and all of its words
async fn delete_topic(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    timed_query("delete_topic", state.store.delete_topic(&id)).await?;
    tracing::info!(topic_id = %id, "Topic deleted");

    Ok(Json(json!({ "success": true })))
}
