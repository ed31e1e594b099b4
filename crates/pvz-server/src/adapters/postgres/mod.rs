//! PostgreSQL Repository Implementations

mod account_repository;
mod item_repository;
mod pickup_point_repository;
mod reception_repository;

#[cfg(test)]
mod tests;

pub use account_repository::PgAccountRepository;
pub use item_repository::PgItemRepository;
pub use pickup_point_repository::PgPickupPointRepository;
pub use reception_repository::PgReceptionRepository;

use pvz::DomainError;

/// Map a sqlx error without a more specific meaning to a repository failure
fn repository_error(err: sqlx::Error) -> DomainError {
    DomainError::Repository(err.to_string())
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Map a foreign-key violation to `NotFound`, anything else to a repository failure
fn missing_parent(err: sqlx::Error, entity_type: &str, id: uuid::Uuid) -> DomainError {
    if matches!(&err, sqlx::Error::Database(db) if db.is_foreign_key_violation()) {
        DomainError::not_found(entity_type, id)
    } else {
        repository_error(err)
    }
}

/// Stored enum text that fails to parse means the row was written by something else
fn corrupt_row(err: DomainError) -> DomainError {
    DomainError::Repository(format!("corrupt row: {}", err))
}
