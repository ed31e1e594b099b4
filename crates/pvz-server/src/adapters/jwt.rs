//! HS256 JWT implementation of TokenService

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pvz::{Actor, DomainError, IssuedToken, Role, TokenService, TokenSubject};

use crate::config::Config;

/// JWT claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret_bytes()),
            ttl: Duration::hours(config.token_ttl_hours),
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, subject: &TokenSubject) -> Result<IssuedToken, DomainError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| DomainError::Internal("token expiry is out of range".to_string()))?;
        let claims = Claims {
            sub: subject.id,
            role: subject.role,
            email: subject.email.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::Internal(format!("token signing failed: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: self.ttl.num_seconds(),
        })
    }

    fn verify(&self, token: &str) -> Result<Actor, DomainError> {
        // Validation::default() is HS256 with `exp` required
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| DomainError::Unauthenticated(format!("invalid token: {}", e)))?;

        Ok(Actor::new(data.claims.sub, data.claims.role))
    }
}
