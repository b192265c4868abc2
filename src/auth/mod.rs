use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::config::SecurityConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: i32, username: String, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            user_id,
            username,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),

    #[error("JWT secret not configured")]
    InvalidSecret,
}

/// Shared HS256 secret plus token lifetime. Cheap to clone.
#[derive(Clone)]
pub struct JwtKeys {
    secret: Arc<str>,
    expiry_hours: u64,
}

impl JwtKeys {
    pub fn new(secret: impl AsRef<str>, expiry_hours: u64) -> Self {
        Self {
            secret: Arc::from(secret.as_ref()),
            expiry_hours,
        }
    }

    pub fn from_config(security: &SecurityConfig) -> Self {
        Self::new(&security.jwt_secret, security.jwt_expiry_hours)
    }

    fn secret(&self) -> Result<&[u8], JwtError> {
        if self.secret.is_empty() {
            return Err(JwtError::InvalidSecret);
        }
        Ok(self.secret.as_bytes())
    }
}

/// Mint a token for `user_id`. Used by the CLI and the test suites.
pub fn generate_jwt(keys: &JwtKeys, user_id: i32, username: impl Into<String>) -> Result<String, JwtError> {
    let claims = Claims::new(user_id, username.into(), keys.expiry_hours);
    let encoding_key = EncodingKey::from_secret(keys.secret()?);

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Validate JWT token and extract claims
pub fn validate_jwt(keys: &JwtKeys, token: &str) -> Result<Claims, JwtError> {
    let decoding_key = DecodingKey::from_secret(keys.secret()?);
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| JwtError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_user_identity() {
        let keys = JwtKeys::new("test-secret", 1);
        let token = generate_jwt(&keys, 42, "ash").unwrap();

        let claims = validate_jwt(&keys, &token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.username, "ash");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_token_signed_with_another_secret() {
        let token = generate_jwt(&JwtKeys::new("one", 1), 1, "misty").unwrap();
        let err = validate_jwt(&JwtKeys::new("two", 1), &token).unwrap_err();
        assert!(matches!(err, JwtError::InvalidToken(_)));
    }

    #[test]
    fn rejects_expired_token() {
        let keys = JwtKeys::new("test-secret", 1);
        let claims = Claims {
            user_id: 1,
            username: "brock".into(),
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
            iat: (Utc::now() - Duration::hours(3)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(validate_jwt(&keys, &token), Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn empty_secret_is_refused() {
        let keys = JwtKeys::new("", 1);
        assert!(matches!(generate_jwt(&keys, 1, "x"), Err(JwtError::InvalidSecret)));
        assert!(matches!(validate_jwt(&keys, "a.b.c"), Err(JwtError::InvalidSecret)));
    }
}
