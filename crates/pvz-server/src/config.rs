//! Server configuration loaded from the secret store.

use thiserror::Error;

const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
/// One leap year
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 366;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    pub token_ttl_hours: i64,
    pub dummy_login_enabled: bool,
}

// Don't expose the signing secret in debug output
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("dummy_login_enabled", &self.dummy_login_enabled)
            .finish()
    }
}

impl Config {
    /// Build the configuration from a key lookup (the shuttle `SecretStore` in production).
    ///
    /// - `JWT_SECRET`: required, non-empty
    /// - `TOKEN_TTL_HOURS`: integer in `1..=8784` (one year), default 24
    /// - `DUMMY_LOGIN_ENABLED`: `true`/`false`, default `true`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let token_ttl_hours = match lookup("TOKEN_TTL_HOURS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|hours| (1..=MAX_TOKEN_TTL_HOURS).contains(hours))
                .ok_or(ConfigError::Invalid {
                    key: "TOKEN_TTL_HOURS",
                    value: raw,
                })?,
            None => DEFAULT_TOKEN_TTL_HOURS,
        };

        let dummy_login_enabled = match lookup("DUMMY_LOGIN_ENABLED") {
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DUMMY_LOGIN_ENABLED",
                        value: raw,
                    })
                }
            },
            None => true,
        };

        Ok(Self {
            jwt_secret,
            token_ttl_hours,
            dummy_login_enabled,
        })
    }

    /// JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}
