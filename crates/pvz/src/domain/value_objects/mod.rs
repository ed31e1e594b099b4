//! Value Objects
//!
//! Closed enumerations validated once at the boundary.

mod city;
mod item_type;
mod reception_status;
mod role;

pub use city::*;
pub use item_type::*;
pub use reception_status::*;
pub use role::*;
