//! Mock storefront backend for testing
//!
//! An in-memory `StoreApi` that behaves like the real server (create,
//! replace-quantity, delete against a held cart) while recording every call
//! with its arguments. Individual operations can be configured to fail so
//! flow tests can exercise the silent-failure paths without a network.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use super::StoreApi;
use crate::error::{ApiError, Result};
use crate::types::{CartItem, InventoryItem, NewCartItem};

/// One recorded API call, with the arguments that matter for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    ListInventory,
    ListCart,
    Add { id: String, quantity: i64 },
    Update { id: String, quantity: i64 },
    Delete { id: String },
}

/// Mock implementation of `StoreApi` backed by in-memory state.
pub struct MockStoreApi {
    inventory: Arc<Mutex<Vec<InventoryItem>>>,
    cart: Arc<Mutex<Vec<CartItem>>>,
    calls: Arc<Mutex<Vec<MockCall>>>,
    fail_list_inventory: Option<String>,
    fail_list_cart: Option<String>,
    fail_add: Option<String>,
    fail_update: Option<String>,
    fail_delete: Option<String>,
    delay: Duration,
}

impl MockStoreApi {
    pub fn new() -> Self {
        Self {
            inventory: Arc::new(Mutex::new(Vec::new())),
            cart: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_list_inventory: None,
            fail_list_cart: None,
            fail_add: None,
            fail_update: None,
            fail_delete: None,
            delay: Duration::from_millis(0),
        }
    }

    /// Seed the catalog the mock serves.
    pub fn with_inventory(self, inventory: Vec<InventoryItem>) -> Self {
        *self.inventory.lock().unwrap() = inventory;
        self
    }

    /// Seed the server-side cart.
    pub fn with_cart(self, cart: Vec<CartItem>) -> Self {
        *self.cart.lock().unwrap() = cart;
        self
    }

    /// Make inventory listing fail with the given message.
    pub fn fail_list_inventory(mut self, error: &str) -> Self {
        self.fail_list_inventory = Some(error.to_string());
        self
    }

    /// Make cart listing fail with the given message.
    pub fn fail_list_cart(mut self, error: &str) -> Self {
        self.fail_list_cart = Some(error.to_string());
        self
    }

    /// Make creates fail with the given message.
    pub fn fail_add(mut self, error: &str) -> Self {
        self.fail_add = Some(error.to_string());
        self
    }

    /// Make updates fail with the given message.
    pub fn fail_update(mut self, error: &str) -> Self {
        self.fail_update = Some(error.to_string());
        self
    }

    /// Make deletes fail with the given message.
    pub fn fail_delete(mut self, error: &str) -> Self {
        self.fail_delete = Some(error.to_string());
        self
    }

    /// Add simulated network latency to every operation.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The cart as the server currently holds it.
    pub fn server_cart(&self) -> Vec<CartItem> {
        self.cart.lock().unwrap().clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

impl Default for MockStoreApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreApi for MockStoreApi {
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>> {
        self.record(MockCall::ListInventory);
        self.pause().await;

        if let Some(msg) = &self.fail_list_inventory {
            return Err(ApiError::Network(msg.clone()).into());
        }
        Ok(self.inventory.lock().unwrap().clone())
    }

    async fn list_cart(&self) -> Result<Vec<CartItem>> {
        self.record(MockCall::ListCart);
        self.pause().await;

        if let Some(msg) = &self.fail_list_cart {
            return Err(ApiError::Network(msg.clone()).into());
        }
        Ok(self.cart.lock().unwrap().clone())
    }

    async fn add_cart_item(&self, item: &NewCartItem) -> Result<CartItem> {
        self.record(MockCall::Add {
            id: item.id.clone(),
            quantity: item.quantity,
        });
        self.pause().await;

        if let Some(msg) = &self.fail_add {
            return Err(ApiError::Network(msg.clone()).into());
        }

        let created = CartItem {
            id: item.id.clone(),
            content: item.content.clone(),
            quantity: item.quantity,
        };
        self.cart.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_cart_item(&self, id: &str, quantity: i64) -> Result<CartItem> {
        self.record(MockCall::Update {
            id: id.to_string(),
            quantity,
        });
        self.pause().await;

        if let Some(msg) = &self.fail_update {
            return Err(ApiError::Network(msg.clone()).into());
        }

        let mut cart = self.cart.lock().unwrap();
        match cart.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.quantity = quantity;
                Ok(entry.clone())
            }
            None => Err(ApiError::Http {
                status: 404,
                body: format!("no cart item {}", id),
            }
            .into()),
        }
    }

    async fn delete_cart_item(&self, id: &str) -> Result<CartItem> {
        self.record(MockCall::Delete { id: id.to_string() });
        self.pause().await;

        if let Some(msg) = &self.fail_delete {
            return Err(ApiError::Network(msg.clone()).into());
        }

        let mut cart = self.cart.lock().unwrap();
        match cart.iter().position(|entry| entry.id == id) {
            Some(index) => Ok(cart.remove(index)),
            None => Err(ApiError::Http {
                status: 404,
                body: format!("no cart item {}", id),
            }
            .into()),
        }
    }
}
