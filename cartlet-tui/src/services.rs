//! Service layer adapter for the TUI
//!
//! Bridges the async `ShopService` and the synchronous event loop:
//!
//! - `ServiceHandle` owns a tokio runtime and the service instance
//! - cart operations are spawned fire-and-forget; their outcome reaches the
//!   loop only as store change events
//! - store events are forwarded from the tokio broadcast channel onto a
//!   crossbeam channel the loop can drain without blocking
//!
//! A failed operation publishes nothing: the store stays as it was and the
//! error goes to the log. That silent-failure policy is deliberate - there
//! is no retry and no user-facing error surface.

use crossbeam_channel::{unbounded, Receiver};
use std::sync::Arc;
use tokio::sync::broadcast;

use libcartlet::types::InventoryItem;
use libcartlet::{Config, ShopService, StoreEvent};

use crate::error::Result;

/// Handle the event loop uses to run service operations
pub struct ServiceHandle {
    service: Arc<ShopService>,
    runtime: tokio::runtime::Runtime,
}

impl ServiceHandle {
    /// Create a handle over an HTTP-backed service
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_service(ShopService::new(config))
    }

    /// Create a handle over an existing service (tests pass a mock-backed
    /// one here)
    pub fn with_service(service: ShopService) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;

        Ok(Self {
            service: Arc::new(service),
            runtime,
        })
    }

    /// Subscribe to store change events
    ///
    /// Returns a crossbeam receiver fed by a forwarding task; the loop
    /// drains it with `try_recv` between frames.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = unbounded();

        let mut events = self.service.subscribe();
        self.runtime.spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            // Receiver dropped, stop forwarding
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("store event receiver lagged, skipped {} events", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        rx
    }

    /// Fetch the catalog into the store
    pub fn refresh_inventory(&self) {
        let service = Arc::clone(&self.service);
        self.runtime.spawn(async move {
            if let Err(e) = service.cart().refresh_inventory().await {
                tracing::error!(error = %e, "inventory fetch failed");
            }
        });
    }

    /// Fetch the authoritative cart into the store
    pub fn refresh_cart(&self) {
        let service = Arc::clone(&self.service);
        self.runtime.spawn(async move {
            if let Err(e) = service.cart().refresh_cart().await {
                tracing::error!(error = %e, "cart fetch failed");
            }
        });
    }

    /// Move a staged quantity into the cart
    pub fn add_to_cart(&self, item: InventoryItem, quantity: i64) {
        let service = Arc::clone(&self.service);
        self.runtime.spawn(async move {
            if let Err(e) = service.cart().add_to_cart(&item, quantity).await {
                tracing::error!(error = %e, id = %item.id, "add to cart failed");
            }
        });
    }

    /// Delete one cart entry
    pub fn delete_item(&self, id: String) {
        let service = Arc::clone(&self.service);
        self.runtime.spawn(async move {
            if let Err(e) = service.cart().delete_item(&id).await {
                tracing::error!(error = %e, id = %id, "cart delete failed");
            }
        });
    }

    /// Delete every cart entry
    pub fn checkout(&self) {
        let service = Arc::clone(&self.service);
        self.runtime.spawn(async move {
            if let Err(e) = service.cart().checkout().await {
                tracing::error!(error = %e, "checkout failed");
            }
        });
    }

    /// Mirror the view's (already clamped) page into the store. Pages
    /// publish no change event, so this is synchronous.
    pub fn set_page(&self, page: usize) {
        self.service.cart().goto_page(page);
    }
}
