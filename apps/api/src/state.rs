use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::google::TokenVerifier;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable ID-token verifier. Production uses the Google tokeninfo
    /// endpoint; tests and local runs can swap in a stub.
    pub token_verifier: Arc<dyn TokenVerifier>,
}
