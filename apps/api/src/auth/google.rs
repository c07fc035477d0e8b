use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::AppError;

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Claims extracted from a verified Google ID token. Only the fields the
/// login flow needs are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleClaims {
    pub email: String,
    pub name: String,
    pub picture: String,
    pub aud: String,
}

/// Verifies a Google ID token and returns its claims.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, id_token: &str) -> Result<GoogleClaims, AppError>;
}

/// Production verifier backed by Google's tokeninfo endpoint. The endpoint
/// checks the token's signature and expiry; the audience is checked here
/// against the configured client id.
pub struct GoogleTokenVerifier {
    http: reqwest::Client,
    client_id: String,
}

impl GoogleTokenVerifier {
    pub fn new(client_id: String) -> Self {
        GoogleTokenVerifier {
            http: reqwest::Client::new(),
            client_id,
        }
    }
}

#[async_trait]
impl TokenVerifier for GoogleTokenVerifier {
    async fn verify(&self, id_token: &str) -> Result<GoogleClaims, AppError> {
        let response = self
            .http
            .get(TOKENINFO_URL)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("tokeninfo request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Unauthorized);
        }

        let claims: GoogleClaims = response
            .json()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("tokeninfo decode failed: {e}")))?;

        if claims.aud != self.client_id {
            tracing::warn!("ID token audience mismatch");
            return Err(AppError::Unauthorized);
        }

        Ok(claims)
    }
}
