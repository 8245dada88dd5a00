pub mod error;
pub mod id;
pub mod models;
pub mod repositories;
pub mod schema;

use std::time::Duration;

use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};

pub use error::DbError;
pub use models::{Topic, Word};

/// Widest value accepted for a topic name or a word field (column width).
pub const MAX_TEXT_LEN: usize = 100;

/// How long a query waits for a connection before failing
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Topic created when the store is empty at startup
pub const SAMPLE_TOPIC: &str = "日常";

/// Words created alongside [`SAMPLE_TOPIC`], as `(en, zh)` pairs
pub const SAMPLE_WORDS: [(&str, &str); 3] = [("apple", "蘋果"), ("water", "水"), ("book", "書")];

/// Create a PostgreSQL connection pool.
///
/// Connections are opened on first use, so an unreachable database does not
/// stop the caller; queries fail until it comes back. Only a malformed URL is
/// an error here. Must be called inside a Tokio runtime.
pub fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(database_url)
        .context("invalid database URL")?;

    Ok(pool)
}

/// Handle on the topic/word store.
///
/// Constructed once by the process entry point and handed to the API layer.
/// Cloning is cheap, clones share the same pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a lazily connecting pool and wrap it.
    pub fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        Ok(Self::new(create_pool(database_url, max_connections)?))
    }

    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the tables and indexes if they do not exist yet.
    pub async fn init_schema(&self) -> Result<(), DbError> {
        let schema = schema::full_schema();
        sqlx::raw_sql(&schema).execute(&self.pool).await?;
        Ok(())
    }

    /// Cheap connectivity check for readiness probes.
    pub async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn list_topics(&self) -> Result<Vec<Topic>, DbError> {
        Ok(repositories::topic::list_all(&self.pool).await?)
    }

    /// Create a topic from a (possibly untrimmed) name.
    pub async fn create_topic(&self, name: &str) -> Result<Topic, DbError> {
        let name = required(name, "Topic name is required")?;
        Ok(repositories::topic::insert(&self.pool, &id::generate_id(), name).await?)
    }

    /// Delete a topic and, through the foreign key cascade, all its words.
    /// Unknown ids are not an error.
    pub async fn delete_topic(&self, id: &str) -> Result<(), DbError> {
        repositories::topic::delete(&self.pool, id).await?;
        Ok(())
    }

    pub async fn list_words_by_topic(&self, topic_id: &str) -> Result<Vec<Word>, DbError> {
        Ok(repositories::word::list_by_topic(&self.pool, topic_id).await?)
    }

    /// Create a word. A `topic_id` that matches no topic fails with a
    /// foreign key violation from the store.
    pub async fn create_word(
        &self,
        topic_id: &str,
        en: &str,
        zh: Option<&str>,
    ) -> Result<Word, DbError> {
        let topic_id = required(topic_id, "Topic ID is required")?;
        let en = required(en, "English word is required")?;
        let zh = zh.map(str::trim).unwrap_or_default();

        Ok(repositories::word::insert(&self.pool, &id::generate_id(), topic_id, en, zh).await?)
    }

    /// Unknown ids are not an error.
    pub async fn delete_word(&self, id: &str) -> Result<(), DbError> {
        repositories::word::delete(&self.pool, id).await?;
        Ok(())
    }

    /// Seed [`SAMPLE_TOPIC`] and [`SAMPLE_WORDS`] when there are no topics.
    ///
    /// Runs in a single transaction. Returns `true` if the seed was written.
    pub async fn ensure_sample_data(&self) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        if repositories::topic::count(&mut *tx).await? > 0 {
            return Ok(false);
        }

        let topic = repositories::topic::insert(&mut *tx, &id::generate_id(), SAMPLE_TOPIC).await?;
        for (en, zh) in SAMPLE_WORDS {
            repositories::word::insert(&mut *tx, &id::generate_id(), &topic.id, en, zh).await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}

fn required<'a>(value: &'a str, message: &str) -> Result<&'a str, DbError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DbError::Validation(message.to_string()));
    }
    Ok(trimmed)
}
