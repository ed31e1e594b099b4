//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Account: registered user (and Actor, the token-derived principal)
//! - PickupPoint (PVZ): goods drop-off location
//! - Reception: batch of goods, at most one open per pickup point
//! - Item: single accepted good

mod account;
mod item;
mod pickup_point;
mod reception;

pub use account::*;
pub use item::*;
pub use pickup_point::*;
pub use reception::*;
