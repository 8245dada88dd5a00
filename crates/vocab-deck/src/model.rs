use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Topic as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub name: String,
    /// Absent in hand-written backups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Topic {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: None,
        }
    }
}

/// Word as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub topic_id: String,
    pub en: String,
    #[serde(default)]
    pub zh: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Word {
    pub fn new(
        id: impl Into<String>,
        topic_id: impl Into<String>,
        en: impl Into<String>,
        zh: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            topic_id: topic_id.into(),
            en: en.into(),
            zh: zh.into(),
            created_at: None,
        }
    }
}
