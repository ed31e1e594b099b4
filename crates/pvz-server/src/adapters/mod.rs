//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod jwt;
pub mod password_hasher;
pub mod postgres;

// Re-exports
pub use jwt::JwtTokenService;
pub use password_hasher::Argon2Hasher;
pub use postgres::{
    PgAccountRepository, PgItemRepository, PgPickupPointRepository, PgReceptionRepository,
};
