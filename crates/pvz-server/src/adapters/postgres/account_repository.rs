//! PostgreSQL implementation of AccountRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use pvz::{Account, AccountRepository, DomainError, Role};

use super::{corrupt_row, is_unique_violation, repository_error};

/// PostgreSQL implementation of AccountRepository
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    email: String,
    role: String,
    password_hash: String,
    registered_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_parts(self) -> Result<(Account, String), DomainError> {
        let role: Role = self.role.parse().map_err(corrupt_row)?;
        let account = Account {
            id: self.id,
            email: self.email,
            role,
            registered_at: self.registered_at,
        };
        Ok((account, self.password_hash))
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(
        &self,
        account: &Account,
        credential_hash: &str,
    ) -> Result<Account, DomainError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (id, email, role, password_hash, registered_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, role, password_hash, registered_at
            "#,
        )
        .bind(account.id)
        .bind(&account.email)
        .bind(account.role.as_str())
        .bind(credential_hash)
        .bind(account.registered_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Conflict(format!(
                    "account with email {} already exists",
                    account.email
                ))
            } else {
                repository_error(e)
            }
        })?;

        let (created, _) = row.into_parts()?;
        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<(Account, String)>, DomainError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, email, role, password_hash, registered_at FROM accounts WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        row.map(AccountRow::into_parts).transpose()
    }
}
