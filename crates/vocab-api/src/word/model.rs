use serde::{Deserialize, Serialize};
use vocab_db::Word;

use crate::validation::string_or_none;

/// Body of `POST /api/words`
///
/// Fields that are missing or not strings come through as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateWordRequest {
    #[serde(default, rename = "topicId", deserialize_with = "string_or_none")]
    pub topic_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub en: Option<String>,
    /// Translation, may be omitted or `null`
    #[serde(default, deserialize_with = "string_or_none")]
    pub zh: Option<String>,
}

/// `{ "words": [...] }`
#[derive(Debug, Clone, Serialize)]
pub struct WordsResponse {
    pub words: Vec<Word>,
}

/// `{ "word": {...} }`
#[derive(Debug, Clone, Serialize)]
pub struct WordResponse {
    pub word: Word,
}
