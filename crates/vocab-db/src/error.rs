use thiserror::Error;

/// Errors returned by the persistence layer
#[derive(Error, Debug)]
pub enum DbError {
    /// Input rejected before any query was issued
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// Whether the store rejected a row because its foreign key points nowhere
    /// (a word created for a topic that does not exist).
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            Self::Sqlx(sqlx::Error::Database(err)) => err.is_foreign_key_violation(),
            _ => false,
        }
    }
}
