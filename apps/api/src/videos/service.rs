//! Video lifecycle queries and orchestration.
//!
//! Query functions take a generic executor so they compose into the
//! transactions the consistency rules require; orchestration functions own
//! the transaction boundaries.

use sqlx::{Executor, PgPool, Postgres};

use crate::errors::AppError;
use crate::models::video::Video;
use crate::pagination::{offset_for, Page, DEFAULT_PER_PAGE};
use crate::search_results;
use crate::videos::schema::{UpdateVideoBody, VideoFields};

pub async fn get_video_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Video>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as("SELECT * FROM videos WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Ownership gate: the acting user must own the video it mutates.
pub fn ensure_owner(video: &Video, user_id: i64) -> Result<(), AppError> {
    if video.user_id != user_id {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

/// Element-wise comparison; tag order is significant.
pub fn tags_changed(current: &[String], incoming: &[String]) -> bool {
    current.len() != incoming.len() || current.iter().zip(incoming).any(|(a, b)| a != b)
}

pub async fn insert_video<'e, E>(
    executor: E,
    user_id: i64,
    fields: &VideoFields,
) -> Result<Video, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        r#"
        INSERT INTO videos (title, video_length, youtube_display_name, youtube_url, tags, user_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&fields.title)
    .bind(&fields.video_length)
    .bind(&fields.youtube_display_name)
    .bind(&fields.youtube_url)
    .bind(&fields.tags)
    .bind(user_id)
    .fetch_one(executor)
    .await
}

/// Partial field replacement. When the tag sequence changes, cached search
/// results for the video are invalidated inside the same transaction, so a
/// stale cache can never be served for the new tags.
pub async fn update_video(
    pool: &PgPool,
    video_id: i64,
    user_id: i64,
    changes: &UpdateVideoBody,
) -> Result<Video, AppError> {
    let mut tx = pool.begin().await?;

    let video = get_video_by_id(&mut *tx, video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video doesn't exist".to_string()))?;
    ensure_owner(&video, user_id)?;

    let invalidate_cache = changes
        .tags
        .as_ref()
        .is_some_and(|incoming| tags_changed(&video.tags, incoming));

    let updated: Video = sqlx::query_as(
        r#"
        UPDATE videos SET
            title = COALESCE($2, title),
            video_length = COALESCE($3, video_length),
            youtube_display_name = COALESCE($4, youtube_display_name),
            tags = COALESCE($5, tags),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(video_id)
    .bind(&changes.title)
    .bind(&changes.video_length)
    .bind(&changes.youtube_display_name)
    .bind(&changes.tags)
    .fetch_one(&mut *tx)
    .await?;

    if invalidate_cache {
        let removed = search_results::service::delete_for_video(&mut *tx, video_id).await?;
        tracing::info!("Invalidated {removed} cached search results for video {video_id}");
    }

    tx.commit().await?;
    Ok(updated)
}

/// Cascading delete: previews and cached search results go first so an
/// interruption can never leave a preview pointing at a missing video.
pub async fn delete_video(pool: &PgPool, video_id: i64, user_id: i64) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let video = get_video_by_id(&mut *tx, video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video doesn't exist".to_string()))?;
    ensure_owner(&video, user_id)?;

    sqlx::query("DELETE FROM previews WHERE video_id = $1")
        .bind(video_id)
        .execute(&mut *tx)
        .await?;
    search_results::service::delete_for_video(&mut *tx, video_id).await?;
    sqlx::query("DELETE FROM videos WHERE id = $1")
        .bind(video_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Most recently updated first, page size 9.
pub async fn list_videos(pool: &PgPool, user_id: i64, page: i64) -> Result<Page<Video>, AppError> {
    let per_page = DEFAULT_PER_PAGE;
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM videos WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    let rows: Vec<Video> = sqlx::query_as(
        r#"
        SELECT * FROM videos
        WHERE user_id = $1
        ORDER BY updated_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(per_page)
    .bind(offset_for(page, per_page))
    .fetch_all(pool)
    .await?;

    Ok(Page::new(total, per_page, page, rows))
}

pub async fn increment_preview_count<'e, E>(executor: E, video_id: i64) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query("UPDATE videos SET preview_count = preview_count + 1 WHERE id = $1")
        .bind(video_id)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn decrement_preview_count<'e, E>(executor: E, video_id: i64) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query("UPDATE videos SET preview_count = preview_count - 1 WHERE id = $1")
        .bind(video_id)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn set_active_thumbnail<'e, E>(
    executor: E,
    video_id: i64,
    thumbnail_url: Option<&str>,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query("UPDATE videos SET active_thumbnail_url = $2, updated_at = now() WHERE id = $1")
        .bind(video_id)
        .bind(thumbnail_url)
        .execute(executor)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn video_owned_by(user_id: i64, tags: &[&str]) -> Video {
        Video {
            id: 1,
            title: "First test video!".to_string(),
            video_length: "10:01".to_string(),
            youtube_display_name: "Test One".to_string(),
            youtube_url: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            preview_count: 0,
            active_thumbnail_url: None,
            user_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_owner_passes_gate() {
        let video = video_owned_by(7, &[]);
        assert!(ensure_owner(&video, 7).is_ok());
    }

    #[test]
    fn test_non_owner_is_unauthorized() {
        let video = video_owned_by(7, &[]);
        assert!(matches!(
            ensure_owner(&video, 8),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_identical_tags_unchanged() {
        let current = vec!["foo".to_string(), "bar".to_string()];
        let incoming = vec!["foo".to_string(), "bar".to_string()];
        assert!(!tags_changed(&current, &incoming));
    }

    #[test]
    fn test_replaced_tags_detected() {
        let current = vec!["foo".to_string(), "bar".to_string()];
        let incoming = vec!["baz".to_string()];
        assert!(tags_changed(&current, &incoming));
    }

    #[test]
    fn test_reordered_tags_detected() {
        let current = vec!["foo".to_string(), "bar".to_string()];
        let incoming = vec!["bar".to_string(), "foo".to_string()];
        assert!(tags_changed(&current, &incoming));
    }

    #[test]
    fn test_empty_to_empty_unchanged() {
        assert!(!tags_changed(&[], &[]));
    }
}
