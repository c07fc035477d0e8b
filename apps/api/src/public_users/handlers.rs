//! Combined create: one request that produces a video together with its
//! first preview. This is a thin composition of the video insert and the
//! preview engine's create, sharing one transaction, not a third code path.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::auth::extract::AuthUser;
use crate::errors::AppError;
use crate::models::preview::Preview;
use crate::models::video::Video;
use crate::previews::schema::PreviewBody;
use crate::previews::service::create_preview_in_tx;
use crate::state::AppState;
use crate::videos::schema::CreateVideoBody;
use crate::videos::service::insert_video;

#[derive(Debug, Deserialize)]
pub struct CreateVideoAndPreviewBody {
    pub video: CreateVideoBody,
    pub preview: PreviewBody,
}

#[derive(Debug, Serialize)]
pub struct CreateVideoAndPreviewResponse {
    pub video: Video,
    pub preview: Preview,
}

/// POST /api/public-users/create-video-and-preview
pub async fn handle_create_video_and_preview(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateVideoAndPreviewBody>,
) -> Result<(StatusCode, Json<CreateVideoAndPreviewResponse>), AppError> {
    let video_fields = body.video.into_parts()?;
    let preview_fields = body.preview.into_parts()?;

    let mut tx = state.db.begin().await?;
    let video = insert_video(&mut *tx, user_id, &video_fields).await?;
    let (video, preview) = create_preview_in_tx(&mut tx, &video, &preview_fields).await?;
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateVideoAndPreviewResponse { video, preview }),
    ))
}
