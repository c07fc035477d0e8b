use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Claims for the internal access token. `sub` carries the user's email,
/// `user_id` the acting principal the core trusts.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub user_id: i64,
    pub iat: i64,
    pub exp: i64,
}

pub fn create_token(
    user_id: i64,
    email: &str,
    secret: &[u8],
    expiry_hours: i64,
) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: email.to_string(),
        user_id,
        iat: now.timestamp(),
        exp: (now + Duration::hours(expiry_hours)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to sign token: {e}")))
}

/// Validates an access token and returns the acting user id.
/// HS256 only, so a token cannot downgrade the algorithm.
pub fn verify_token(token: &str, secret: &[u8]) -> Result<i64, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|_| AppError::Unauthorized)?;

    Ok(data.claims.user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn test_round_trip_returns_user_id() {
        let token = create_token(42, "test@test.com", SECRET, 12).unwrap();
        assert_eq!(verify_token(&token, SECRET).unwrap(), 42);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token(42, "test@test.com", SECRET, 12).unwrap();
        assert!(verify_token(&token, b"other-secret").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = create_token(42, "test@test.com", SECRET, -1).unwrap();
        assert!(verify_token(&token, SECRET).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(verify_token("not-a-jwt", SECRET).is_err());
    }
}
