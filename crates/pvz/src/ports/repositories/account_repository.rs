//! Account Repository Port

use async_trait::async_trait;

use crate::domain::{Account, DomainError};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository interface for accounts and their credential hashes
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Store a new account. A taken email yields `DomainError::Conflict`.
    async fn create(&self, account: &Account, credential_hash: &str)
        -> Result<Account, DomainError>;

    /// Find an account by its normalized email, together with the credential hash
    async fn find_by_email(&self, email: &str) -> Result<Option<(Account, String)>, DomainError>;
}
