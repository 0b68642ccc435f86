//! Observable client-side store for inventory, cart, and pagination
//!
//! The store is the single owner of the mirrored backend state. Replacing
//! the inventory or the cart publishes a change event to every subscriber
//! before the setter returns; changing the current page publishes nothing,
//! because page flips re-render only the inventory view and are driven
//! explicitly by the caller.
//!
//! Subscription uses a broadcast channel, so any number of views can watch
//! the same store. Events published while nobody is subscribed are dropped.

use std::sync::Mutex;
use tokio::sync::broadcast;

use crate::types::{CartItem, InventoryItem};

/// Buffer capacity per subscriber before a lagging receiver starts
/// dropping events.
const EVENT_CAPACITY: usize = 100;

/// Change notification published by the store.
///
/// Events carry the full replacement sequence; subscribers render from the
/// payload without reading the store back.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    InventoryChanged { inventory: Vec<InventoryItem> },
    CartChanged { cart: Vec<CartItem> },
}

#[derive(Debug, Default)]
struct StoreState {
    inventory: Vec<InventoryItem>,
    cart: Vec<CartItem>,
    current_page: usize,
}

/// The client-side state container.
pub struct Store {
    state: Mutex<StoreState>,
    events: broadcast::Sender<StoreEvent>,
}

impl Store {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Mutex::new(StoreState::default()),
            events,
        }
    }

    /// Subscribe to change events. Multiple subscribers are supported; each
    /// receives every event published after it subscribed.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn inventory(&self) -> Vec<InventoryItem> {
        self.state.lock().unwrap().inventory.clone()
    }

    pub fn cart(&self) -> Vec<CartItem> {
        self.state.lock().unwrap().cart.clone()
    }

    pub fn current_page(&self) -> usize {
        self.state.lock().unwrap().current_page
    }

    /// Replace the inventory and notify subscribers before returning.
    pub fn set_inventory(&self, inventory: Vec<InventoryItem>) {
        {
            let mut state = self.state.lock().unwrap();
            state.inventory = inventory.clone();
        }
        let _ = self.events.send(StoreEvent::InventoryChanged { inventory });
    }

    /// Replace the cart and notify subscribers before returning.
    pub fn set_cart(&self, cart: Vec<CartItem>) {
        {
            let mut state = self.state.lock().unwrap();
            state.cart = cart.clone();
        }
        let _ = self.events.send(StoreEvent::CartChanged { cart });
    }

    /// Replace the current page without notification. Callers are expected
    /// to pass an already-clamped value and to re-render the inventory page
    /// themselves.
    pub fn set_current_page(&self, page: usize) {
        self.state.lock().unwrap().current_page = page;
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of pages needed to show `len` items at `page_size` per page.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The items visible on `page`, i.e. `items[page*size .. page*size+size]`
/// clipped to the sequence bounds.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Clamp a requested page index to `[0, page_count - 1]`.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.min(page_count(len, page_size).saturating_sub(1))
}
