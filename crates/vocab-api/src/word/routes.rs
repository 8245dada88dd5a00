use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::{
    ApiState,
    error::ApiError,
    metrics::timed_query,
    router::method_not_allowed,
    validation::{self, WORD_FIELDS_REQUIRED},
};

use super::model::{CreateWordRequest, WordResponse, WordsResponse};

/// Create the word routes
///
/// `GET` and `DELETE` share `/api/words/{id}`: for `GET` the id is a topic id,
/// for `DELETE` it is a word id.
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route(
            "/api/words",
            post(create_word).fallback(method_not_allowed),
        )
        .route(
            "/api/words/{id}",
            get(list_words)
                .delete(delete_word)
                .fallback(method_not_allowed),
        )
}

/// List the words of a topic in creation order
async fn list_words(
    State(state): State<ApiState>,
    Path(topic_id): Path<String>,
) -> Result<Json<WordsResponse>, ApiError> {
    let words = timed_query("list_words", state.store.list_words_by_topic(&topic_id)).await?;

    Ok(Json(WordsResponse { words }))
}

/// Add a word to a topic
async fn create_word(
    State(state): State<ApiState>,
    payload: Result<Json<CreateWordRequest>, JsonRejection>,
) -> Result<Json<WordResponse>, ApiError> {
    let Json(payload) = payload?;

    let topic_id = validation::required(payload.topic_id.as_deref(), WORD_FIELDS_REQUIRED)?;
    let en = validation::required(payload.en.as_deref(), WORD_FIELDS_REQUIRED)?;
    let zh = payload.zh.as_deref().map(str::trim);

    validation::validate_max_length("en", en)?;
    if let Some(zh) = zh {
        validation::validate_max_length("zh", zh)?;
    }

    let word = timed_query("create_word", state.store.create_word(topic_id, en, zh)).await?;
    tracing::info!(word_id = %word.id, topic_id = %word.topic_id, "Word created");

    Ok(Json(WordResponse { word }))
}

/// Delete a single word
async fn delete_word(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    timed_query("delete_word", state.store.delete_word(&id)).await?;
    tracing::info!(word_id = %id, "Word deleted");

    Ok(Json(json!({ "success": true })))
}
