//! Application state
//!
//! The view-side mirror of the store: list contents, pagination, focus,
//! selection, and the staged quantity counters. Staged counters are
//! ephemeral by design - they reset whenever the inventory list re-renders
//! (inventory replacement or page change) and are never persisted.

use std::collections::HashMap;

use libcartlet::config::DEFAULT_PAGE_SIZE;
use libcartlet::store::{page_count, page_slice};
use libcartlet::types::{CartItem, InventoryItem};

use super::actions::Panel;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Panel with keyboard focus
    pub focus: Panel,

    /// Inventory as last published by the store
    pub inventory: Vec<InventoryItem>,

    /// Cart as last published by the store
    pub cart: Vec<CartItem>,

    /// Current inventory page (0-indexed)
    pub current_page: usize,

    /// Inventory rows per page
    pub page_size: usize,

    /// Staged quantity per inventory id; absent means 0
    pub pending: HashMap<String, i64>,

    /// Selected row within the visible inventory page
    pub inventory_selected: usize,

    /// Selected row within the cart
    pub cart_selected: usize,

    /// UI configuration
    pub config: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("CARTLET_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("CARTLET_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl AppState {
    /// Create the initial state for the given page size
    pub fn new(page_size: usize) -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            focus: Panel::Inventory,
            inventory: Vec::new(),
            cart: Vec::new(),
            current_page: 0,
            page_size,
            pending: HashMap::new(),
            inventory_selected: 0,
            cart_selected: 0,
            config: UiConfig::default(),
        }
    }

    /// The inventory rows visible on the current page
    pub fn visible_inventory(&self) -> &[InventoryItem] {
        page_slice(&self.inventory, self.current_page, self.page_size)
    }

    /// Number of inventory pages
    pub fn page_count(&self) -> usize {
        page_count(self.inventory.len(), self.page_size)
    }

    /// The selected inventory row, if any rows are visible
    pub fn selected_item(&self) -> Option<&InventoryItem> {
        self.visible_inventory().get(self.inventory_selected)
    }

    /// The selected cart entry, if the cart is non-empty
    pub fn selected_cart_item(&self) -> Option<&CartItem> {
        self.cart.get(self.cart_selected)
    }

    /// Staged quantity for an inventory id (0 when untouched)
    pub fn pending_for(&self, id: &str) -> i64 {
        self.pending.get(id).copied().unwrap_or(0)
    }
}
