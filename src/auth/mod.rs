use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

pub mod revocation;

pub use revocation::RevokedTokens;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub id: i32,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(id: i32) -> Self {
        let iat = Utc::now().timestamp();
        let expiry_hours = config::config().security.jwt_expiry_hours;

        Self {
            id,
            exp: expiry_after(iat, expiry_hours),
            iat,
        }
    }

    /// Seconds until the token expires, zero once expired
    pub fn expires_in(&self) -> i64 {
        (self.exp - Utc::now().timestamp()).max(0)
    }
}

/// `iat + hours`, saturating instead of overflowing on absurd configured lifetimes
fn expiry_after(iat: i64, hours: u64) -> i64 {
    let seconds = i64::try_from(hours)
        .ok()
        .and_then(|h| h.checked_mul(SECONDS_PER_HOUR))
        .unwrap_or(i64::MAX);
    iat.saturating_add(seconds)
}

const SECONDS_PER_HOUR: i64 = 3600;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),

    #[error("Password hashing error: {0}")]
    Hashing(String),
}

pub fn generate_jwt(claims: &Claims) -> Result<String, AuthError> {
    encode_with_secret(claims, &config::config().security.jwt_secret)
}

pub fn validate_jwt(token: &str) -> Result<Claims, AuthError> {
    decode_with_secret(token, &config::config().security.jwt_secret)
}

fn encode_with_secret(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

fn decode_with_secret(token: &str, secret: &str) -> Result<Claims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::InvalidSecret);
    }

    // Zero leeway: validity ends at `exp`, when the revocation list drops the token
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

/// Hash a password with the configured bcrypt cost.
///
/// bcrypt is deliberately slow, so the work runs on the blocking pool.
pub async fn hash_password(password: String) -> Result<String, AuthError> {
    let cost = config::config().security.bcrypt_cost;
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Check a password against a stored bcrypt hash
pub async fn verify_password(password: String, hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn token_round_trips_claims() {
        let claims = Claims::new(42);
        let token = encode_with_secret(&claims, SECRET).unwrap();

        let decoded = decode_with_secret(&token, SECRET).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = encode_with_secret(&Claims::new(1), "other-secret").unwrap();
        let err = decode_with_secret(&token, SECRET).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            id: 1,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode_with_secret(&claims, SECRET).unwrap();

        assert!(decode_with_secret(&token, SECRET).is_err());
        assert_eq!(claims.expires_in(), 0);
    }

    #[test]
    fn recently_expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            id: 77,
            iat: now - 3600,
            exp: now - 20,
        };
        let token = encode_with_secret(&claims, SECRET).unwrap();

        let err = decode_with_secret(&token, SECRET).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn expiry_saturates_for_huge_lifetimes() {
        assert_eq!(expiry_after(1_000, 2), 1_000 + 7_200);
        assert_eq!(expiry_after(1_000, u64::MAX), i64::MAX);
        assert_eq!(expiry_after(1_000, i64::MAX as u64), i64::MAX);
    }

    #[test]
    fn empty_secret_refuses_to_sign() {
        let err = encode_with_secret(&Claims::new(1), "").unwrap_err();
        assert!(matches!(err, AuthError::InvalidSecret));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(decode_with_secret("not.a.jwt", SECRET).is_err());
    }

    #[tokio::test]
    async fn password_hash_verifies_only_the_original() {
        let hash = hash_password("s3cret!".to_string()).await.unwrap();
        assert_ne!(hash, "s3cret!");

        assert!(verify_password("s3cret!".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("wrong".to_string(), hash).await.unwrap());
    }
}
