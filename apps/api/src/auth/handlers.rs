use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::jwt;
use crate::errors::AppError;
use crate::state::AppState;
use crate::users::service::{find_by_email, insert_user, NewUser};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub id_token: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(rename = "authToken")]
    pub auth_token: String,
}

/// POST /api/auth/login
/// Verifies a Google ID token, creating the user on first login, and
/// returns an internal JWT carrying the user id.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let claims = state.token_verifier.verify(&req.id_token).await?;

    let user = match find_by_email(&state.db, &claims.email).await? {
        Some(user) => user,
        None => {
            let user = insert_user(
                &state.db,
                &NewUser {
                    email: &claims.email,
                    full_name: &claims.name,
                    avatar: &claims.picture,
                },
            )
            .await?;
            info!("Created user {} on first login", user.id);
            user
        }
    };

    let auth_token = jwt::create_token(
        user.id,
        &user.email,
        state.config.jwt_secret.as_bytes(),
        state.config.jwt_expiry_hours,
    )?;

    Ok(Json(LoginResponse { auth_token }))
}
