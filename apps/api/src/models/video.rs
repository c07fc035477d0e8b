use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog video. `preview_count` and `active_thumbnail_url` are derived
/// from the video's previews and are only ever written together with them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub video_length: String,
    pub youtube_display_name: String,
    pub youtube_url: Option<String>,
    pub tags: Vec<String>,
    pub preview_count: i64,
    pub active_thumbnail_url: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
