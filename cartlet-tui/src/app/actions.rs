//! Actions for the reducer pattern
//!
//! Every user gesture and every store notification becomes one of these
//! variants. The reducer applies them to state; the main loop performs the
//! network side effects for the variants that have any.

use crossterm::event::KeyEvent;
use libcartlet::types::{CartItem, InventoryItem};

/// Actions that drive state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Toggle the help overlay
    ToggleHelp,

    /// Hide the help overlay
    HideHelp,

    /// Move focus to the other panel
    FocusNext,

    /// Move the selection down within the focused panel
    SelectNext,

    /// Move the selection up within the focused panel
    SelectPrev,

    // === Staged quantity ===
    /// Bump the selected inventory row's staged counter up by one
    IncreaseQty,

    /// Bump the selected inventory row's staged counter down by one
    /// (unguarded; the counter may go negative)
    DecreaseQty,

    // === Cart operations (side effects live in the main loop) ===
    /// Move the selected row's staged quantity into the cart
    AddToCart,

    /// Delete the selected cart entry
    DeleteFromCart,

    /// Delete every cart entry
    Checkout,

    /// Re-fetch inventory and cart from the backend
    Refresh,

    // === Pagination ===
    /// Go back one inventory page
    PrevPage,

    /// Advance one inventory page
    NextPage,

    /// Jump to a specific inventory page (0-indexed)
    GotoPage(usize),

    // === Store notifications ===
    /// The store's inventory was replaced
    InventoryLoaded { inventory: Vec<InventoryItem> },

    /// The store's cart was replaced
    CartLoaded { cart: Vec<CartItem> },
}

/// Which panel has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Inventory,
    Cart,
}

impl Panel {
    /// The other panel (Tab cycles between the two)
    pub fn next(self) -> Self {
        match self {
            Panel::Inventory => Panel::Cart,
            Panel::Cart => Panel::Inventory,
        }
    }
}
