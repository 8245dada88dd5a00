//! JSON backup of the client state.
//!
//! A backup holds topics and words only; quizzes are not saved. Files written
//! by older clients may lack `exportedAt` or `version`, both are optional on
//! import.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    model::{Topic, Word},
    state::State,
};

pub const BACKUP_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("Backup is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Backup has an invalid format")]
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub topics: Vec<Topic>,
    pub words_by_topic_id: BTreeMap<String, Vec<Word>>,
    #[serde(default)]
    pub current_topic_id: Option<String>,
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(default = "default_version")]
    pub version: u32,
}

const fn default_version() -> u32 {
    BACKUP_VERSION
}

impl Backup {
    /// Snapshot `state` at `now`
    pub fn export(state: &State, now: DateTime<Utc>) -> Self {
        Self {
            topics: state.topics.clone(),
            words_by_topic_id: state.words_by_topic_id.clone(),
            current_topic_id: state.current_topic_id.clone(),
            exported_at: Some(now),
            version: BACKUP_VERSION,
        }
    }

    /// Pretty-printed JSON, as written to the backup file
    pub fn to_json(&self) -> Result<String, BackupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a backup file.
    ///
    /// `topics` must be an array and `wordsByTopicId` an object, otherwise
    /// the file is rejected as [`BackupError::InvalidFormat`].
    pub fn from_json(text: &str) -> Result<Self, BackupError> {
        let value: Value = serde_json::from_str(text)?;

        let has_topics = value.get("topics").is_some_and(Value::is_array);
        let has_words = value.get("wordsByTopicId").is_some_and(Value::is_object);
        if !(has_topics && has_words) {
            return Err(BackupError::InvalidFormat);
        }

        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Action, reduce};
    use chrono::TimeZone;
    use serde_json::json;

    fn state() -> State {
        let state = reduce(
            State::default(),
            Action::TopicsLoaded(vec![Topic::new("t1", "Travel")]),
        );
        reduce(
            state,
            Action::WordsLoaded {
                topic_id: "t1".into(),
                words: vec![Word::new("w1", "t1", "airport", "機場")],
            },
        )
    }

    #[test]
    fn test_export_document_shape() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let json = Backup::export(&state(), now).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            json!({
                "topics": [{ "id": "t1", "name": "Travel" }],
                "wordsByTopicId": {
                    "t1": [{ "id": "w1", "topic_id": "t1", "en": "airport", "zh": "機場" }]
                },
                "currentTopicId": "t1",
                "exportedAt": "2024-05-01T08:30:00Z",
                "version": 1
            })
        );
    }

    #[test]
    fn test_export_then_import_restores_state() {
        let original = state();
        let json = Backup::export(&original, Utc::now()).to_json().unwrap();

        let backup = Backup::from_json(&json).unwrap();
        let restored = reduce(State::default(), Action::BackupImported(backup));

        assert_eq!(restored, original);
    }

    #[test]
    fn test_import_minimal_document() {
        let backup = Backup::from_json(r#"{"topics": [], "wordsByTopicId": {}}"#).unwrap();

        assert!(backup.topics.is_empty());
        assert_eq!(backup.current_topic_id, None);
        assert_eq!(backup.exported_at, None);
        assert_eq!(backup.version, BACKUP_VERSION);
    }

    #[test]
    fn test_import_rejects_wrong_shapes() {
        let documents = [
            json!({ "wordsByTopicId": {} }),
            json!({ "topics": {}, "wordsByTopicId": {} }),
            json!({ "topics": [] }),
            json!({ "topics": [], "wordsByTopicId": [] }),
            json!({ "topics": [], "wordsByTopicId": null }),
            json!([]),
        ];

        for document in documents {
            let result = Backup::from_json(&document.to_string());
            assert!(
                matches!(result, Err(BackupError::InvalidFormat)),
                "accepted {document}"
            );
        }
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        assert!(matches!(
            Backup::from_json("{ not json"),
            Err(BackupError::Json(_))
        ));
    }
}
