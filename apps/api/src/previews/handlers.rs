use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::auth::extract::AuthUser;
use crate::errors::AppError;
use crate::models::preview::Preview;
use crate::models::video::Video;
use crate::previews::sanitize::sanitize_preview;
use crate::previews::schema::PreviewBody;
use crate::previews::service;
use crate::state::AppState;
use crate::videos::service::get_video_by_id;

#[derive(Debug, Serialize)]
pub struct PreviewListResponse {
    pub video: Video,
    pub previews: Vec<Preview>,
}

#[derive(Debug, Serialize)]
pub struct PreviewCreateResponse {
    pub video: Video,
    pub preview: Preview,
}

/// GET /api/videos/:video_id/previews
pub async fn handle_list_previews(
    State(state): State<AppState>,
    Path(video_id): Path<i64>,
) -> Result<Json<PreviewListResponse>, AppError> {
    let video = get_video_by_id(&state.db, video_id)
        .await?
        .ok_or_else(|| {
            AppError::InvalidReference("No video found matching selected query".to_string())
        })?;

    let previews = service::get_previews(&state.db, video_id)
        .await?
        .into_iter()
        .map(sanitize_preview)
        .collect();

    Ok(Json(PreviewListResponse { video, previews }))
}

/// POST /api/videos/:video_id/previews
pub async fn handle_create_preview(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(video_id): Path<i64>,
    Json(body): Json<PreviewBody>,
) -> Result<(StatusCode, Json<PreviewCreateResponse>), AppError> {
    let fields = body.into_parts()?;
    let (video, preview) = service::create_preview(&state.db, video_id, user_id, &fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(PreviewCreateResponse { video, preview }),
    ))
}

/// PATCH /api/videos/:video_id/previews/:preview_id
pub async fn handle_update_preview(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((video_id, preview_id)): Path<(i64, i64)>,
    Json(body): Json<PreviewBody>,
) -> Result<Json<Preview>, AppError> {
    let fields = body.into_parts()?;
    let preview =
        service::update_preview(&state.db, video_id, preview_id, user_id, &fields).await?;
    Ok(Json(preview))
}

/// DELETE /api/videos/:video_id/previews/:preview_id
pub async fn handle_delete_preview(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((video_id, preview_id)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    service::delete_preview(&state.db, video_id, preview_id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
