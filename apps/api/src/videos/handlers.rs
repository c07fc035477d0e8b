use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::auth::extract::AuthUser;
use crate::errors::AppError;
use crate::models::video::Video;
use crate::pagination::Page;
use crate::state::AppState;
use crate::videos::schema::{validate_tags, CreateVideoBody, UpdateVideoBody};
use crate::videos::service;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

/// GET /api/videos
pub async fn handle_list_videos(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(params): Query<PageQuery>,
) -> Result<Json<Page<Video>>, AppError> {
    let page = service::list_videos(&state.db, user_id, params.page.unwrap_or(1)).await?;
    Ok(Json(page))
}

/// POST /api/videos
pub async fn handle_create_video(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateVideoBody>,
) -> Result<(StatusCode, Json<Video>), AppError> {
    let fields = body.into_parts()?;
    let video = service::insert_video(&state.db, user_id, &fields).await?;
    Ok((StatusCode::CREATED, Json(video)))
}

/// GET /api/videos/:video_id
pub async fn handle_get_video(
    State(state): State<AppState>,
    Path(video_id): Path<i64>,
) -> Result<Json<Video>, AppError> {
    let video = service::get_video_by_id(&state.db, video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video doesn't exist".to_string()))?;
    Ok(Json(video))
}

/// PATCH /api/videos/:video_id
pub async fn handle_update_video(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(video_id): Path<i64>,
    Json(body): Json<UpdateVideoBody>,
) -> Result<StatusCode, AppError> {
    if !body.has_recognized_field() {
        return Err(AppError::Validation(
            "Request body must contain either 'title', 'video_length', 'youtube_display_name', or 'tags'"
                .to_string(),
        ));
    }
    body.validate()?;
    if let Some(tags) = &body.tags {
        validate_tags(tags)?;
    }

    service::update_video(&state.db, video_id, user_id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/videos/:video_id
pub async fn handle_delete_video(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(video_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    service::delete_video(&state.db, video_id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
