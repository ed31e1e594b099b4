//! Role - Access level carried by every account and token

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Account role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(rename = "client")]
    Client,
    /// Pickup-point employee
    #[serde(rename = "employee", alias = "staff", alias = "pvz_staff")]
    Staff,
    #[serde(rename = "moderator")]
    Moderator,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Client, Role::Staff, Role::Moderator];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Staff => "employee",
            Role::Moderator => "moderator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Role::Client),
            "employee" | "staff" | "pvz_staff" => Ok(Role::Staff),
            "moderator" => Ok(Role::Moderator),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_aliases() {
        for raw in ["employee", "staff", "pvz_staff"] {
            assert_eq!(raw.parse::<Role>().unwrap(), Role::Staff);
        }
        assert_eq!(Role::Staff.to_string(), "employee");
    }

    #[test]
    fn test_unknown_role_rejected() {
        for raw in ["", "admin", "Moderator", " client"] {
            let err = raw.parse::<Role>().unwrap_err();
            assert!(matches!(err, DomainError::InvalidRole(_)), "{raw:?}");
        }
    }

    #[test]
    fn test_serde_matches_display() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }
}
