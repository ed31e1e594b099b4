//! PVZ Data Transfer Objects
//!
//! - Auth: dummy login, registration, login, tokens
//! - Pickup point: creation and nested listing
//! - Reception: receptions and items (products)
//!
//! All JSON field names are camelCase.

mod auth;
mod pickup_point;
mod reception;

pub use auth::*;
pub use pickup_point::*;
pub use reception::*;
