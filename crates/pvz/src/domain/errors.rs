//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use uuid::Uuid;

use super::value_objects::Role;

/// Domain layer errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Role {role} is not allowed to {action}")]
    Forbidden { action: &'static str, role: Role },

    #[error("Pickup points can only be opened in Moscow, Saint Petersburg or Kazan, got {0:?}")]
    InvalidCity(String),

    #[error("Unknown item type: {0:?}")]
    InvalidItemType(String),

    #[error("Unknown role: {0:?}")]
    InvalidRole(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Pickup point {0} already has an open reception")]
    ReceptionAlreadyOpen(Uuid),

    #[error("Pickup point {0} has no open reception")]
    NoOpenReception(Uuid),

    #[error("Reception {0} has no items to remove")]
    NoItemsToRemove(Uuid),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse error classification used by delivery adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Forbidden,
    Validation,
    Conflict,
    /// Missing open reception or item; reported like a validation failure
    Missing,
    NotFound,
    Unauthenticated,
    Internal,
}

impl DomainError {
    pub fn forbidden(action: &'static str, role: Role) -> Self {
        Self::Forbidden { action, role }
    }

    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Forbidden { .. } => ErrorKind::Forbidden,
            Self::InvalidCity(_)
            | Self::InvalidItemType(_)
            | Self::InvalidRole(_)
            | Self::Validation(_) => ErrorKind::Validation,
            Self::ReceptionAlreadyOpen(_) | Self::Conflict(_) => ErrorKind::Conflict,
            Self::NoOpenReception(_) | Self::NoItemsToRemove(_) => ErrorKind::Missing,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidCredentials | Self::Unauthenticated(_) => ErrorKind::Unauthenticated,
            Self::Repository(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }
}
