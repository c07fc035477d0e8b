use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::auth::extract::AuthUser;
use crate::errors::AppError;
use crate::search_results::service;
use crate::state::AppState;
use crate::videos::service::{ensure_owner, get_video_by_id};

/// GET /api/videos/:video_id/youtube-search-results
/// The cached blob, or an empty array when nothing is cached.
pub async fn handle_get_search_results(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(video_id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    match service::find_first_for_video(&state.db, video_id).await? {
        Some(entry) => Ok(Json(entry.data)),
        None => Ok(Json(json!([]))),
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct StoreSearchResultsBody {
    pub data: Option<serde_json::Value>,
}

/// POST /api/videos/:video_id/youtube-search-results
pub async fn handle_store_search_results(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(video_id): Path<i64>,
    Json(body): Json<StoreSearchResultsBody>,
) -> Result<impl IntoResponse, AppError> {
    let video = get_video_by_id(&state.db, video_id)
        .await?
        .ok_or_else(|| AppError::InvalidReference("invalid video id".to_string()))?;
    ensure_owner(&video, user_id)?;

    let data = body
        .data
        .filter(|d| !d.is_null())
        .ok_or_else(|| AppError::Validation("data field is required".to_string()))?;

    let saved = service::insert(&state.db, video_id, &data).await?;
    let location = format!("/api/videos/{video_id}/youtube-search-results");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(saved),
    ))
}
