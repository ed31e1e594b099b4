//! PVZ API Routes
//!
//! - /dummyLogin, /register, /login - Tokens and accounts
//! - /pvz - Pickup point creation and nested listing
//! - /pvz/:pvz_id/close_last_reception, /pvz/:pvz_id/delete_last_product
//! - /receptions, /products - Goods intake

pub mod auth;
pub mod pickup_point;
pub mod reception;
pub mod swagger;
