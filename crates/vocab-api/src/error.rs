use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use vocab_db::DbError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] JsonRejection),
    #[error("Not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Store error: {0}")]
    Store(#[source] DbError),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Validation(msg) => Self::Validation(msg),
            other => Self::Store(other),
        }
    }
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Store failures stay generic.
    fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::InvalidJson(_) => "Invalid JSON body".to_string(),
            Self::Store(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Store(err) if err.is_foreign_key_violation() => {
                tracing::error!(error = %self, "Word references a topic that does not exist");
            }
            Self::Store(_) => {
                tracing::error!(error = %self, "API error");
            }
            Self::InvalidJson(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body");
            }
            _ => {}
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_validation_becomes_bad_request() {
        let err = ApiError::from(DbError::Validation("Topic name is required".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Topic name is required");
    }

    #[test]
    fn test_store_error_is_not_leaked() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_routing_errors() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotFound.public_message(), "Not found");
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::MethodNotAllowed.public_message(),
            "Method not allowed"
        );
    }
}
