//! Application Layer (Use Cases)
//!
//! Enforces role checks and entity invariants, then delegates
//! to the persistence and service ports.

mod auth_service;
mod pickup_point_service;
mod reception_service;

pub use auth_service::AuthService;
pub use pickup_point_service::PickupPointService;
pub use reception_service::ReceptionService;
