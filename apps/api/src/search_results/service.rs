use sqlx::{Executor, Postgres};

use crate::models::search_result::SearchResult;

/// The first (oldest) entry for the video, if any. The schema permits
/// multiple rows per video, so callers must invalidate before re-storing.
pub async fn find_first_for_video<'e, E>(
    executor: E,
    video_id: i64,
) -> Result<Option<SearchResult>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        "SELECT * FROM youtube_search_results WHERE video_id = $1 ORDER BY id ASC LIMIT 1",
    )
    .bind(video_id)
    .fetch_optional(executor)
    .await
}

pub async fn insert<'e, E>(
    executor: E,
    video_id: i64,
    data: &serde_json::Value,
) -> Result<SearchResult, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        r#"
        INSERT INTO youtube_search_results (video_id, data)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(video_id)
    .bind(data)
    .fetch_one(executor)
    .await
}

/// Hard delete of every entry for the video. Returns the number removed.
pub async fn delete_for_video<'e, E>(executor: E, video_id: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query("DELETE FROM youtube_search_results WHERE video_id = $1")
        .bind(video_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
