//! Auth Application Service (Use Case)
//!
//! Registration, password login, role-token issuance and
//! bearer-token authentication.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Account, Actor, DomainError, Role};
use crate::ports::{AccountRepository, CredentialHasher, IssuedToken, TokenService, TokenSubject};

/// Verified on a login miss so that unknown emails cost the same as bad passwords.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ZHVtbXlzYWx0MTIzNDU2$ZHVtbXloYXNoMTIzNDU2Nzg5MDEyMzQ1Njc4OTAxMg";

/// Application service for authentication
pub struct AuthService<A, H, T>
where
    A: AccountRepository + ?Sized,
    H: CredentialHasher + ?Sized,
    T: TokenService + ?Sized,
{
    accounts: Arc<A>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<A, H, T> AuthService<A, H, T>
where
    A: AccountRepository + ?Sized,
    H: CredentialHasher + ?Sized,
    T: TokenService + ?Sized,
{
    pub fn new(accounts: Arc<A>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
        }
    }

    /// Register a new account. The returned account never carries the hash.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<Account, DomainError> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::validation("email and password are required"));
        }
        let role: Role = role.parse()?;

        if self.accounts.find_by_email(&email).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "account with email {} already exists",
                email
            )));
        }

        let credential_hash = self.hasher.hash(password)?;
        let account = Account::new(email, role);
        let created = self.accounts.create(&account, &credential_hash).await?;

        tracing::info!("Registered {} account {}", created.role, created.id);

        Ok(created)
    }

    /// Verify email + password and issue a token for the account
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, DomainError> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::validation("email and password are required"));
        }

        let found = self.accounts.find_by_email(&email).await?;
        let hash = found.as_ref().map_or(DUMMY_HASH, |(_, hash)| hash.as_str());
        let password_valid = self.hasher.verify(password, hash);

        let account = match found {
            Some((account, _)) if password_valid => account,
            _ => {
                tracing::warn!("Rejected login attempt");
                return Err(DomainError::InvalidCredentials);
            }
        };

        self.tokens.issue(&TokenSubject {
            id: account.id,
            role: account.role,
            email: Some(account.email),
        })
    }

    /// Issue a token for a role without any credential check.
    ///
    /// Exposed over HTTP only when dummy login is enabled in the config.
    pub fn role_token(&self, role: &str) -> Result<IssuedToken, DomainError> {
        let role: Role = role.parse()?;

        self.tokens.issue(&TokenSubject {
            id: Uuid::new_v4(),
            role,
            email: None,
        })
    }

    /// Resolve a bearer token into the acting principal
    pub fn authenticate(&self, token: &str) -> Result<Actor, DomainError> {
        self.tokens.verify(token)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
