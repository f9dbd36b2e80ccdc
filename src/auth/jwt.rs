use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::identity::Principal;
use crate::config::{SecurityConfig, MAX_JWT_EXPIRY_HOURS};
use crate::database::models::User;
use crate::types::{parse_id, DomainError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id as a decimal string
    pub sub: String,
    pub login: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user: &User, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let hours = expiry_hours.min(MAX_JWT_EXPIRY_HOURS) as i64;
        let exp = (now + Duration::hours(hours)).timestamp();

        Self {
            sub: user.id.to_string(),
            login: user.login.clone(),
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
    #[error("Invalid JWT secret")]
    InvalidSecret,
}

impl From<JwtError> for DomainError {
    fn from(err: JwtError) -> Self {
        DomainError::Storage(err.to_string())
    }
}

/// Issues and verifies HS256 access tokens carrying {user id, login}
#[derive(Clone)]
pub struct JwtIssuer {
    secret: String,
    expiry_hours: u64,
}

impl JwtIssuer {
    pub fn new(secret: impl Into<String>, expiry_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            expiry_hours,
        }
    }

    pub fn from_config(config: &SecurityConfig) -> Self {
        Self::new(config.jwt_secret.clone(), config.jwt_expiry_hours)
    }

    pub fn issue(&self, user: &User) -> Result<String, JwtError> {
        if self.secret.is_empty() {
            return Err(JwtError::InvalidSecret);
        }

        let claims = Claims::new(user, self.expiry_hours);
        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| JwtError::TokenGeneration(e.to_string()))
    }

    /// Verify signature and expiry, then lift the claims into a `Principal`
    pub fn parse(&self, token: &str) -> Result<Principal, DomainError> {
        if self.secret.is_empty() {
            return Err(DomainError::InvalidAccessToken);
        }

        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default()).map_err(|e| {
            tracing::debug!("Rejected access token: {}", e);
            DomainError::InvalidAccessToken
        })?;

        let user_id = parse_id(&token_data.claims.sub).map_err(|_| DomainError::InvalidAccessToken)?;
        Ok(Principal::new(user_id, token_data.claims.login))
    }
}
