use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Topic model - a named group of words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Topic {
    /// Opaque identifier generated by [`crate::id::generate_id`]
    pub id: String,
    /// Display name, trimmed (max 100 chars)
    pub name: String,
    /// When the topic was created, used for ordering
    pub created_at: DateTime<Utc>,
}

/// Word model - a term and its translation inside one topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Word {
    /// Opaque identifier generated by [`crate::id::generate_id`]
    pub id: String,
    /// Topic this word belongs to (indexed)
    pub topic_id: String,
    /// Source-language term, trimmed (max 100 chars)
    pub en: String,
    /// Translation, trimmed, empty when unknown
    pub zh: String,
    /// When the word was created, used for ordering
    pub created_at: DateTime<Utc>,
}
