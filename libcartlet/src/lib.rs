//! Cartlet - client library for a REST storefront
//!
//! This library mirrors a remote inventory and cart behind an observable
//! store and exposes the cart operations (add, update, delete, checkout)
//! that interactive frontends drive.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use client::{HttpStoreClient, StoreApi};
pub use config::Config;
pub use error::{CartletError, Result};
pub use service::ShopService;
pub use store::{Store, StoreEvent};
pub use types::{CartItem, InventoryItem};
