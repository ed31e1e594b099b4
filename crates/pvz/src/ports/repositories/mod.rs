//! Repository Ports
//!
//! One capability-oriented interface per entity.

mod account_repository;
mod item_repository;
mod pickup_point_repository;
mod reception_repository;

pub use account_repository::*;
pub use item_repository::*;
pub use pickup_point_repository::*;
pub use reception_repository::*;
