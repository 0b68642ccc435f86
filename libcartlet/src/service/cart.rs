//! Cart operations: the reconciliation between user actions and the backend
//!
//! Every operation follows the same strict order: network call, then store
//! mutation, then (via the store) change notification. There is no ordering
//! guarantee between two overlapping operations; the last response to land
//! wins in the store. Two rapid add operations race on the authoritative
//! re-fetch below, a known hazard this layer does not try to fix.

use std::sync::Arc;
use tracing::debug;

use crate::client::StoreApi;
use crate::error::Result;
use crate::store::{clamp_page, Store};
use crate::types::{InventoryItem, NewCartItem};

/// Cart and pagination operations over the store.
#[derive(Clone)]
pub struct CartService {
    store: Arc<Store>,
    api: Arc<dyn StoreApi>,
    page_size: usize,
}

impl CartService {
    pub fn new(store: Arc<Store>, api: Arc<dyn StoreApi>, page_size: usize) -> Self {
        Self {
            store,
            api,
            page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Fetch the catalog and replace the store's inventory.
    pub async fn refresh_inventory(&self) -> Result<()> {
        let inventory = self.api.list_inventory().await?;
        debug!(count = inventory.len(), "inventory fetched");
        self.store.set_inventory(inventory);
        Ok(())
    }

    /// Fetch the authoritative cart and replace the store's cart.
    pub async fn refresh_cart(&self) -> Result<()> {
        let cart = self.api.list_cart().await?;
        debug!(count = cart.len(), "cart fetched");
        self.store.set_cart(cart);
        Ok(())
    }

    /// Move a staged quantity into the cart.
    ///
    /// A staged quantity of exactly 0 is a no-op. Otherwise the
    /// authoritative cart is re-fetched and consulted:
    /// - id absent: create the entry, then prepend the server's response
    ///   to the local cart;
    /// - id present: update with the summed quantity (existing + staged),
    ///   then replace the matching entry in place and republish the whole
    ///   sequence.
    ///
    /// Negative staged quantities pass the zero guard and are sent to the
    /// server as-is.
    pub async fn add_to_cart(&self, item: &InventoryItem, quantity: i64) -> Result<()> {
        if quantity == 0 {
            debug!(id = %item.id, "nothing staged, skipping add");
            return Ok(());
        }

        let authoritative = self.api.list_cart().await?;
        match authoritative.iter().find(|entry| entry.id == item.id) {
            None => {
                let created = self
                    .api
                    .add_cart_item(&NewCartItem::from_inventory(item, quantity))
                    .await?;
                debug!(id = %created.id, quantity = created.quantity, "cart entry created");

                let mut cart = self.store.cart();
                cart.insert(0, created);
                self.store.set_cart(cart);
            }
            Some(existing) => {
                let updated = self
                    .api
                    .update_cart_item(&item.id, existing.quantity + quantity)
                    .await?;
                debug!(id = %updated.id, quantity = updated.quantity, "cart entry updated");

                let mut cart = self.store.cart();
                if let Some(slot) = cart.iter_mut().find(|entry| entry.id == item.id) {
                    *slot = updated;
                }
                self.store.set_cart(cart);
            }
        }
        Ok(())
    }

    /// Delete one cart entry, then drop it from the local cart.
    pub async fn delete_item(&self, id: &str) -> Result<()> {
        let removed = self.api.delete_cart_item(id).await?;
        debug!(id = %removed.id, "cart entry deleted");

        let mut cart = self.store.cart();
        cart.retain(|entry| entry.id != id);
        self.store.set_cart(cart);
        Ok(())
    }

    /// Run the aggregate checkout, then empty the local cart.
    ///
    /// The local clear happens once the aggregate settles, success or
    /// failure; the error (if any) is still returned for the caller's log.
    pub async fn checkout(&self) -> Result<()> {
        let result = self.api.checkout().await;
        self.store.set_cart(Vec::new());
        result.map(|removed| {
            debug!(count = removed.len(), "checkout complete");
        })
    }

    /// Jump to a page, clamped to the valid range for the current
    /// inventory. No change event fires; the caller re-renders the
    /// inventory page itself.
    pub fn goto_page(&self, page: usize) {
        let len = self.store.inventory().len();
        self.store.set_current_page(clamp_page(page, len, self.page_size));
    }

    /// Advance one page, clamped.
    pub fn next_page(&self) {
        self.goto_page(self.store.current_page().saturating_add(1));
    }

    /// Go back one page, clamped.
    pub fn prev_page(&self) {
        self.goto_page(self.store.current_page().saturating_sub(1));
    }
}
