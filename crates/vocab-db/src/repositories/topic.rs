use sqlx::{Executor, Postgres};

use crate::models::Topic;

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Topic>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, created_at
            FROM topics
            ORDER BY created_at ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*) FROM topics
        "#,
    )
    .fetch_one(executor)
    .await
}

pub async fn insert<'e, E>(executor: E, id: &str, name: &str) -> Result<Topic, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO topics (id, name)
            VALUES ($1, $2)
            RETURNING id, name, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .fetch_one(executor)
    .await
}

/// Delete a topic. Its words go with it through `ON DELETE CASCADE`.
///
/// Returns the number of deleted topics (0 when the id is unknown).
pub async fn delete<'e, E>(executor: E, id: &str) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM topics WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
