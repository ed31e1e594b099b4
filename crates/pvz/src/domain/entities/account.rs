//! Account - Registered user, and the Actor acting on its behalf

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DomainError, Role};

/// Registered account. The credential hash is never part of this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub registered_at: DateTime<Utc>,
}

impl Account {
    pub fn new(email: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            role,
            registered_at: Utc::now(),
        }
    }
}

/// Authenticated principal performing an operation (decoded from a token)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }

    /// Fail with `Forbidden` unless the actor holds one of `allowed`.
    pub fn require(&self, action: &'static str, allowed: &[Role]) -> Result<(), DomainError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(DomainError::forbidden(action, self.role))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_accepts_listed_role() {
        let actor = Actor::new(Uuid::new_v4(), Role::Moderator);
        assert!(actor
            .require("list pickup points", &[Role::Staff, Role::Moderator])
            .is_ok());
    }

    #[test]
    fn test_require_rejects_other_roles() {
        let actor = Actor::new(Uuid::new_v4(), Role::Client);
        let err = actor.require("add items", &[Role::Staff]).unwrap_err();
        assert_eq!(
            err,
            DomainError::Forbidden {
                action: "add items",
                role: Role::Client
            }
        );
    }
}
