pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth;
use crate::previews;
use crate::public_users;
use crate::search_results;
use crate::state::AppState;
use crate::videos;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/auth/login", post(auth::handlers::handle_login))
        .route(
            "/api/videos",
            get(videos::handlers::handle_list_videos).post(videos::handlers::handle_create_video),
        )
        .route(
            "/api/videos/:video_id",
            get(videos::handlers::handle_get_video)
                .patch(videos::handlers::handle_update_video)
                .delete(videos::handlers::handle_delete_video),
        )
        .route(
            "/api/videos/:video_id/previews",
            get(previews::handlers::handle_list_previews)
                .post(previews::handlers::handle_create_preview),
        )
        .route(
            "/api/videos/:video_id/previews/:preview_id",
            axum::routing::patch(previews::handlers::handle_update_preview)
                .delete(previews::handlers::handle_delete_preview),
        )
        .route(
            "/api/videos/:video_id/youtube-search-results",
            get(search_results::handlers::handle_get_search_results)
                .post(search_results::handlers::handle_store_search_results),
        )
        .route(
            "/api/public-users/create-video-and-preview",
            post(public_users::handlers::handle_create_video_and_preview),
        )
        .with_state(state)
}
