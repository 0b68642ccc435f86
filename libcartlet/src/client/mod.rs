//! Storefront API abstraction and implementations
//!
//! `StoreApi` wraps the five REST endpoints the backend exposes. Every
//! operation is a one-shot call: no retries, no timeouts, no backoff, and
//! failures propagate to the caller unchanged.
//!
//! # Examples
//!
//! ```no_run
//! use libcartlet::client::{HttpStoreClient, StoreApi};
//! use libcartlet::config::ApiConfig;
//!
//! # async fn example() -> libcartlet::Result<()> {
//! let client = HttpStoreClient::new(&ApiConfig::default());
//!
//! let inventory = client.list_inventory().await?;
//! println!("{} items for sale", inventory.len());
//!
//! let cleared = client.checkout().await?;
//! println!("removed {} cart entries", cleared.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use futures::future::try_join_all;

use crate::error::Result;
use crate::types::{CartItem, InventoryItem, NewCartItem};

pub mod http;

// Mock client is available for all builds (not just tests) so integration
// tests in dependent crates can drive the service layer without a server.
pub mod mock;

pub use http::HttpStoreClient;
pub use mock::{MockCall, MockStoreApi};

/// Client interface for the storefront REST backend.
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// `GET /inventory` - the full catalog.
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>>;

    /// `GET /cart` - the authoritative cart contents.
    async fn list_cart(&self) -> Result<Vec<CartItem>>;

    /// `POST /cart` - create a cart entry; the server returns the
    /// canonical record.
    async fn add_cart_item(&self, item: &NewCartItem) -> Result<CartItem>;

    /// `PATCH /cart/:id` - replace an entry's quantity with an absolute
    /// value (not a delta) and return the updated record.
    async fn update_cart_item(&self, id: &str, quantity: i64) -> Result<CartItem>;

    /// `DELETE /cart/:id` - remove an entry; the server echoes the deleted
    /// record.
    async fn delete_cart_item(&self, id: &str) -> Result<CartItem>;

    /// Aggregate checkout: fetch the current cart, then issue one delete
    /// per entry concurrently. Fail-fast: the first delete error fails the
    /// whole operation, and no partial-failure recovery is attempted.
    async fn checkout(&self) -> Result<Vec<CartItem>> {
        let cart = self.list_cart().await?;
        let deletes = cart.iter().map(|item| self.delete_cart_item(&item.id));
        try_join_all(deletes).await
    }
}
