//! Preview consistency engine.
//!
//! Invariants maintained here, for every video:
//! - `preview_count` equals the number of preview rows referencing it.
//! - `active_thumbnail_url` equals the active preview's `thumbnail_url`,
//!   and is NULL when the video has no previews.
//! - At most one preview is active; exactly one once a preview exists.
//!
//! Every mutation that touches more than one row runs inside a single
//! transaction, so a reader can never observe two active previews, a
//! miscounted video, or an orphaned preview.

use sqlx::{Executor, PgPool, Postgres, Transaction};

use crate::errors::AppError;
use crate::models::preview::Preview;
use crate::models::video::Video;
use crate::previews::schema::PreviewFields;
use crate::videos::service::{
    decrement_preview_count, ensure_owner, get_video_by_id, increment_preview_count,
    set_active_thumbnail,
};

pub async fn fetch_preview<'e, E>(executor: E, id: i64) -> Result<Option<Preview>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as("SELECT * FROM previews WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Previews in insertion order (id ascending).
pub async fn get_previews<'e, E>(executor: E, video_id: i64) -> Result<Vec<Preview>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as("SELECT * FROM previews WHERE video_id = $1 ORDER BY id ASC")
        .bind(video_id)
        .fetch_all(executor)
        .await
}

async fn insert_preview<'e, E>(
    executor: E,
    video_id: i64,
    fields: &PreviewFields,
    is_active: bool,
) -> Result<Preview, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        r#"
        INSERT INTO previews (video_id, thumbnail_url, title, description, is_active)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(video_id)
    .bind(&fields.thumbnail_url)
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(is_active)
    .fetch_one(executor)
    .await
}

async fn clear_active<'e, E>(executor: E, video_id: i64) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query("UPDATE previews SET is_active = false WHERE video_id = $1")
        .bind(video_id)
        .execute(executor)
        .await?;
    Ok(())
}

/// The preview that inherits active status when the active one is deleted:
/// the oldest remaining (lowest id), or none when the video has no
/// previews left.
pub fn elect_successor(remaining: &[Preview]) -> Option<&Preview> {
    remaining.iter().min_by_key(|p| p.id)
}

/// Inserts a preview for an already-fetched video and maintains the count
/// and active pointer, inside the caller's transaction. The first preview
/// of a video is stored active regardless of the request's intent flag;
/// later previews are stored inactive (activation is only ever the
/// explicit switch in [`update_preview`]).
pub async fn create_preview_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    video: &Video,
    fields: &PreviewFields,
) -> Result<(Video, Preview), AppError> {
    let first = video.preview_count == 0;
    let preview = insert_preview(&mut **tx, video.id, fields, first).await?;

    increment_preview_count(&mut **tx, video.id).await?;
    if first {
        set_active_thumbnail(&mut **tx, video.id, Some(&preview.thumbnail_url)).await?;
    }

    let updated = get_video_by_id(&mut **tx, video.id)
        .await?
        .ok_or_else(|| AppError::InvalidReference("Invalid video ID".to_string()))?;
    Ok((updated, preview))
}

/// Create preview: existence check before insert, so an orphaned preview
/// can never be created.
pub async fn create_preview(
    pool: &PgPool,
    video_id: i64,
    user_id: i64,
    fields: &PreviewFields,
) -> Result<(Video, Preview), AppError> {
    let mut tx = pool.begin().await?;

    let video = get_video_by_id(&mut *tx, video_id)
        .await?
        .ok_or_else(|| AppError::InvalidReference("Invalid video ID".to_string()))?;
    ensure_owner(&video, user_id)?;

    let created = create_preview_in_tx(&mut tx, &video, fields).await?;
    tx.commit().await?;
    Ok(created)
}

/// Update preview. With `is_active` intent this is the active-preview
/// switch: clear-all, repoint the video, then update the target row, all
/// in one transaction. Without it, a plain field update that touches the
/// active row keeps the video's pointer in step with the new thumbnail.
pub async fn update_preview(
    pool: &PgPool,
    video_id: i64,
    preview_id: i64,
    user_id: i64,
    fields: &PreviewFields,
) -> Result<Preview, AppError> {
    let mut tx = pool.begin().await?;

    let video = get_video_by_id(&mut *tx, video_id)
        .await?
        .ok_or_else(|| AppError::InvalidReference("Invalid video ID".to_string()))?;
    ensure_owner(&video, user_id)?;

    let existing = fetch_preview(&mut *tx, preview_id)
        .await?
        .filter(|p| p.video_id == video_id)
        .ok_or_else(|| AppError::InvalidReference("Preview does not exist".to_string()))?;

    let make_active = fields.is_active;
    if make_active {
        clear_active(&mut *tx, video_id).await?;
        set_active_thumbnail(&mut *tx, video_id, Some(&fields.thumbnail_url)).await?;
    } else if existing.is_active {
        // Keep the video pointer matched to the active row's thumbnail.
        set_active_thumbnail(&mut *tx, video_id, Some(&fields.thumbnail_url)).await?;
    }

    let updated: Preview = sqlx::query_as(
        r#"
        UPDATE previews SET
            thumbnail_url = $2,
            title = $3,
            description = $4,
            is_active = is_active OR $5,
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(preview_id)
    .bind(&fields.thumbnail_url)
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(make_active)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(updated)
}

/// Delete preview: both ids are required as a pair, so a preview can never
/// be deleted through another video's URL. Count maintenance, the row
/// delete, and active re-election commit together.
pub async fn delete_preview(
    pool: &PgPool,
    video_id: i64,
    preview_id: i64,
    user_id: i64,
) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let video = get_video_by_id(&mut *tx, video_id)
        .await?
        .ok_or_else(|| AppError::InvalidReference("Invalid video ID".to_string()))?;
    ensure_owner(&video, user_id)?;

    let preview = fetch_preview(&mut *tx, preview_id)
        .await?
        .filter(|p| p.video_id == video_id)
        .ok_or_else(|| AppError::InvalidReference("Preview does not exist".to_string()))?;

    decrement_preview_count(&mut *tx, video_id).await?;
    sqlx::query("DELETE FROM previews WHERE id = $1")
        .bind(preview_id)
        .execute(&mut *tx)
        .await?;

    if preview.is_active {
        let remaining = get_previews(&mut *tx, video_id).await?;
        match elect_successor(&remaining) {
            Some(next) => {
                sqlx::query(
                    "UPDATE previews SET is_active = true, updated_at = now() WHERE id = $1",
                )
                .bind(next.id)
                .execute(&mut *tx)
                .await?;
                set_active_thumbnail(&mut *tx, video_id, Some(&next.thumbnail_url)).await?;
            }
            None => set_active_thumbnail(&mut *tx, video_id, None).await?,
        }
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn preview(id: i64) -> Preview {
        Preview {
            id,
            video_id: 1,
            thumbnail_url: format!("http://placehold.it/{id}"),
            title: format!("Preview {id}"),
            description: "a catchy description".to_string(),
            is_active: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_successor_is_lowest_id() {
        let remaining = vec![preview(4), preview(2), preview(9)];
        assert_eq!(elect_successor(&remaining).map(|p| p.id), Some(2));
    }

    #[test]
    fn test_no_successor_when_none_remain() {
        assert!(elect_successor(&[]).is_none());
    }
}
