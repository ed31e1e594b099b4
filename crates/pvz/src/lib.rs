//! PVZ Domain Library
//!
//! Core types, interfaces and use cases for managing goods intake at
//! pickup points (PVZ).
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Account, PickupPoint, Reception, Item
//!   - `value_objects/`: Closed enumerations (Role, City, ItemType, ReceptionStatus)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: Credential hashing and token interfaces
//!
//! - **Application** (`application/`): Role-checked use cases over the ports
//!
//! With the `test-utils` feature, `testing::InMemoryStore` implements every
//! repository port and the port mocks are exported.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pvz::application::ReceptionService;
//! use pvz::testing::InMemoryStore;
//!
//! let store = Arc::new(InMemoryStore::new());
//! let receptions = ReceptionService::new(store.clone(), store);
//! ```

pub mod application;
pub mod domain;
pub mod ports;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types
pub use application::{AuthService, PickupPointService, ReceptionService};
pub use domain::{
    Account, Actor, City, DomainError, ErrorKind, Item, ItemType, PickupPoint, PickupPointDetails,
    PickupPointFilter, Reception, ReceptionDetails, ReceptionStatus, Role,
};
pub use ports::{
    AccountRepository, CredentialHasher, IssuedToken, ItemRepository, PickupPointRepository,
    ReceptionRepository, TokenService, TokenSubject,
};
