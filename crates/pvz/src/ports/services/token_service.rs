//! Token Service Port

use uuid::Uuid;

use crate::domain::{Actor, DomainError, Role};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Claims to embed in a new token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub id: Uuid,
    pub role: Role,
    pub email: Option<String>,
}

/// A signed bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

/// Issues and verifies signed, time-bound, role-bearing tokens
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait TokenService: Send + Sync {
    fn issue(&self, subject: &TokenSubject) -> Result<IssuedToken, DomainError>;

    /// Decode a token into the acting principal.
    /// Any failure (signature, expiry, claims) is `DomainError::Unauthenticated`.
    fn verify(&self, token: &str) -> Result<Actor, DomainError>;
}
