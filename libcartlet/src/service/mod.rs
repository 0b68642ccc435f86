//! Service layer for Cartlet
//!
//! `ShopService` is the single entry point frontends construct once at
//! startup: it owns the observable store, the backend client, and the cart
//! operations that keep the two in sync. Everything here is testable
//! against the mock client.
//!
//! # Example
//!
//! ```no_run
//! use libcartlet::service::ShopService;
//! use libcartlet::Config;
//!
//! # async fn example() -> libcartlet::Result<()> {
//! let service = ShopService::new(Config::default());
//! let mut events = service.subscribe();
//!
//! service.cart().refresh_inventory().await?;
//! service.cart().refresh_cart().await?;
//!
//! while let Ok(event) = events.recv().await {
//!     println!("store changed: {:?}", event);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cart;

pub use cart::CartService;

use std::sync::Arc;
use tokio::sync::broadcast;

use crate::client::{HttpStoreClient, StoreApi};
use crate::config::Config;
use crate::store::{Store, StoreEvent};

/// Facade wiring the store and the backend client together.
pub struct ShopService {
    store: Arc<Store>,
    cart: CartService,
}

impl ShopService {
    /// Create an HTTP-backed service from configuration.
    pub fn new(config: Config) -> Self {
        let api: Arc<dyn StoreApi> = Arc::new(HttpStoreClient::new(&config.api));
        Self::with_api(config, api)
    }

    /// Create a service over an explicit client implementation.
    ///
    /// Tests pass the mock client here; production code goes through
    /// [`ShopService::new`].
    pub fn with_api(config: Config, api: Arc<dyn StoreApi>) -> Self {
        let store = Arc::new(Store::new());
        let cart = CartService::new(Arc::clone(&store), api, config.ui.page_size);
        Self { store, cart }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Access the cart operations.
    pub fn cart(&self) -> &CartService {
        &self.cart
    }

    /// Subscribe to store change events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.store.subscribe()
    }
}
