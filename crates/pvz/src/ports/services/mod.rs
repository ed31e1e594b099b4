//! Service Ports
//!
//! Interfaces for credential hashing and token issuance.

mod credential_hasher;
mod token_service;

pub use credential_hasher::*;
pub use token_service::*;
