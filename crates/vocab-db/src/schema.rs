//! Database schema definitions.
//!
//! Every statement is idempotent (`IF NOT EXISTS`) so the schema can be
//! applied on each process start.

/// SQL schema for topics table
pub const TOPICS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS topics (
    id VARCHAR(50) PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()
);

CREATE INDEX IF NOT EXISTS idx_topics_name ON topics(name);
"#;

/// SQL schema for words table
///
/// `clock_timestamp()` rather than `NOW()` so rows inserted in the same
/// transaction (the seed) still sort in insertion order.
pub const WORDS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS words (
    id VARCHAR(50) PRIMARY KEY,
    topic_id VARCHAR(50) NOT NULL,
    en VARCHAR(100) NOT NULL,
    zh VARCHAR(100) NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
    CONSTRAINT fk_words_topic FOREIGN KEY (topic_id) REFERENCES topics(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_words_topic_id ON words(topic_id);
"#;

/// Full database schema with all tables, topics first for the foreign key
pub fn full_schema() -> String {
    format!("{}\n\n{}", TOPICS_SCHEMA, WORDS_SCHEMA)
}
