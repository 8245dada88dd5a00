use serde::{Deserialize, Serialize};
use vocab_db::Topic;

use crate::validation::string_or_none;

/// Body of `POST /api/topics`
///
/// `name` is optional here so a missing or non-string name is reported as a
/// validation error rather than a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTopicRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
}

/// `{ "topics": [...] }`
#[derive(Debug, Clone, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

/// `{ "topic": {...} }`
#[derive(Debug, Clone, Serialize)]
pub struct TopicResponse {
    pub topic: Topic,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use vocab_db::Word;

    fn topic() -> Topic {
        Topic {
            id: "t1".to_string(),
            name: "Travel".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_missing_or_non_string_name_is_none() {
        for body in ["{}", r#"{"name": 42}"#, r#"{"name": {"en": "Travel"}}"#] {
            let req: CreateTopicRequest = serde_json::from_str(body).unwrap();
            assert_eq!(req.name, None, "body {body}");
        }
    }

    #[test]
    fn test_client_reads_topic_response() {
        let json = serde_json::to_string(&TopicsResponse {
            topics: vec![topic()],
        })
        .unwrap();

        #[derive(serde::Deserialize)]
        struct Body {
            topics: Vec<vocab_deck::Topic>,
        }
        let body: Body = serde_json::from_str(&json).unwrap();

        assert_eq!(body.topics[0].id, "t1");
        assert_eq!(body.topics[0].name, "Travel");
        assert_eq!(body.topics[0].created_at, Some(topic().created_at));
    }

    #[test]
    fn test_client_reads_word() {
        let word = Word {
            id: "w1".to_string(),
            topic_id: "t1".to_string(),
            en: "airport".to_string(),
            zh: "機場".to_string(),
            created_at: topic().created_at,
        };

        let client: vocab_deck::Word =
            serde_json::from_value(serde_json::to_value(&word).unwrap()).unwrap();

        assert_eq!(client.topic_id, "t1");
        assert_eq!(client.en, "airport");
        assert_eq!(client.zh, "機場");
    }
}
