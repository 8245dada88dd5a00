use sqlx::{Executor, Postgres};

use crate::models::Word;

pub async fn list_by_topic<'e, E>(executor: E, topic_id: &str) -> Result<Vec<Word>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, topic_id, en, COALESCE(zh, '') AS zh, created_at
            FROM words
            WHERE topic_id = $1
            ORDER BY created_at ASC
        "#,
    )
    .bind(topic_id)
    .fetch_all(executor)
    .await
}

pub async fn insert<'e, E>(
    executor: E,
    id: &str,
    topic_id: &str,
    en: &str,
    zh: &str,
) -> Result<Word, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO words (id, topic_id, en, zh)
            VALUES ($1, $2, $3, $4)
            RETURNING id, topic_id, en, zh, created_at
        "#,
    )
    .bind(id)
    .bind(topic_id)
    .bind(en)
    .bind(zh)
    .fetch_one(executor)
    .await
}

/// Returns the number of deleted words (0 when the id is unknown).
pub async fn delete<'e, E>(executor: E, id: &str) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM words WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
