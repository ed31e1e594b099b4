//! Credential Hasher Port

use crate::domain::DomainError;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way password hashing
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash a plain-text password with a fresh salt
    fn hash(&self, plain_text: &str) -> Result<String, DomainError>;

    /// Check a plain-text password against a stored hash.
    /// Malformed hashes verify as `false`.
    fn verify(&self, plain_text: &str, hash: &str) -> bool;
}
