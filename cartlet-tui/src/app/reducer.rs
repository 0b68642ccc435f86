//! Pure reducer function for state transitions
//!
//! The reducer is a pure function `(State, Action) -> State`: no network,
//! no I/O. Cart operations (`AddToCart`, `DeleteFromCart`, `Checkout`,
//! `Refresh`) leave state untouched here; the main loop performs them and
//! the results come back as `InventoryLoaded` / `CartLoaded`.

use crossterm::event::{KeyCode, KeyEvent};
use libcartlet::store::clamp_page;

use super::actions::{Action, Panel};
use super::state::AppState;

/// Map a key press to its action under the current state.
///
/// The main loop uses this before reducing so it can see which cart
/// operation (if any) a key triggered and run the side effect itself.
pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Esc => state.help_visible.then_some(Action::HideHelp),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('c') => Some(Action::Checkout),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        _ => match state.focus {
            Panel::Inventory => match key.code {
                KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::IncreaseQty),
                KeyCode::Char('-') => Some(Action::DecreaseQty),
                KeyCode::Char('a') | KeyCode::Enter => Some(Action::AddToCart),
                KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevPage),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPage),
                KeyCode::Char(c @ '1'..='9') => {
                    // Page labels are 1-indexed; pressing "k" goes to page k-1
                    Some(Action::GotoPage(c as usize - '1' as usize))
                }
                _ => None,
            },
            Panel::Cart => match key.code {
                KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
                    Some(Action::DeleteFromCart)
                }
                _ => None,
            },
        },
    }
}

/// Pure reducer function
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => match map_key(&state, key) {
            Some(action) => reduce(state, action),
            None => state,
        },
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ToggleHelp => AppState {
            help_visible: !state.help_visible,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::FocusNext => AppState {
            focus: state.focus.next(),
            ..state
        },

        Action::SelectNext => move_selection(state, 1),
        Action::SelectPrev => move_selection(state, -1),

        // === Staged quantity ===
        Action::IncreaseQty => bump_pending(state, 1),
        Action::DecreaseQty => bump_pending(state, -1),

        // === Cart operations ===
        // Performed outside the reducer; results arrive as store
        // notifications below.
        Action::AddToCart | Action::DeleteFromCart | Action::Checkout | Action::Refresh => state,

        // === Pagination ===
        Action::PrevPage => {
            let target = state.current_page.saturating_sub(1);
            set_page(state, target)
        }
        Action::NextPage => {
            let target = state.current_page.saturating_add(1);
            set_page(state, target)
        }
        Action::GotoPage(page) => set_page(state, page),

        // === Store notifications ===
        Action::InventoryLoaded { inventory } => {
            let current_page = clamp_page(state.current_page, inventory.len(), state.page_size);
            let mut next = AppState {
                inventory,
                current_page,
                // re-render resets every staged counter
                pending: Default::default(),
                ..state
            };
            next.inventory_selected = clamp_selection(
                next.inventory_selected,
                next.visible_inventory().len(),
            );
            next
        }

        Action::CartLoaded { cart } => {
            let cart_selected = clamp_selection(state.cart_selected, cart.len());
            AppState {
                cart,
                cart_selected,
                ..state
            }
        }
    }
}

/// Flip to another inventory page, clamped to the valid range. Staged
/// counters reset because the page re-renders from scratch.
fn set_page(state: AppState, target: usize) -> AppState {
    let current_page = clamp_page(target, state.inventory.len(), state.page_size);
    AppState {
        current_page,
        pending: Default::default(),
        inventory_selected: 0,
        ..state
    }
}

/// Move the focused panel's selection by one row, clamped.
fn move_selection(state: AppState, delta: i64) -> AppState {
    let mut state = state;
    match state.focus {
        Panel::Inventory => {
            let rows = state.visible_inventory().len();
            state.inventory_selected = step(state.inventory_selected, delta, rows);
        }
        Panel::Cart => {
            let rows = state.cart.len();
            state.cart_selected = step(state.cart_selected, delta, rows);
        }
    }
    state
}

fn step(index: usize, delta: i64, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    let next = if delta < 0 {
        index.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        index.saturating_add(delta as usize)
    };
    next.min(rows - 1)
}

fn clamp_selection(index: usize, rows: usize) -> usize {
    index.min(rows.saturating_sub(1))
}

/// Adjust the selected row's staged counter. Deliberately unguarded on the
/// low side: the counter may go negative.
fn bump_pending(state: AppState, delta: i64) -> AppState {
    if state.focus != Panel::Inventory {
        return state;
    }
    let Some(id) = state.selected_item().map(|item| item.id.clone()) else {
        return state;
    };

    let mut state = state;
    *state.pending.entry(id).or_insert(0) += delta;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use libcartlet::types::{CartItem, InventoryItem};

    fn item(id: &str, content: &str) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            content: content.to_string(),
        }
    }

    fn loaded_state(count: usize, page_size: usize) -> AppState {
        let inventory = (0..count)
            .map(|i| item(&(i + 1).to_string(), "Item"))
            .collect();
        reduce(
            AppState::new(page_size),
            Action::InventoryLoaded { inventory },
        )
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new(8);
        let before = state.clone();

        let next = reduce(state.clone(), Action::Quit);

        assert!(!before.should_quit);
        assert!(next.should_quit);
    }

    #[test]
    fn test_increase_then_decrease_cancels_out() {
        let state = loaded_state(1, 8);

        let state = reduce(state, Action::IncreaseQty);
        assert_eq!(state.pending_for("1"), 1);

        let state = reduce(state, Action::DecreaseQty);
        assert_eq!(state.pending_for("1"), 0);
    }

    #[test]
    fn test_decrease_may_go_negative() {
        let state = loaded_state(1, 8);

        let state = reduce(state, Action::DecreaseQty);

        assert_eq!(state.pending_for("1"), -1);
    }

    #[test]
    fn test_quantity_keys_ignored_without_rows() {
        let state = AppState::new(8);

        let state = reduce(state, Action::IncreaseQty);

        assert!(state.pending.is_empty());
    }

    #[test]
    fn test_inventory_load_resets_staged_counters() {
        let state = loaded_state(2, 8);
        let state = reduce(state, Action::IncreaseQty);
        assert_eq!(state.pending_for("1"), 1);

        let state = reduce(
            state,
            Action::InventoryLoaded {
                inventory: vec![item("1", "Item"), item("2", "Item")],
            },
        );

        assert_eq!(state.pending_for("1"), 0);
        assert!(state.pending.is_empty());
    }

    #[test]
    fn test_page_change_resets_staged_counters() {
        let state = loaded_state(10, 8);
        let state = reduce(state, Action::IncreaseQty);
        assert_eq!(state.pending_for("1"), 1);

        let state = reduce(state, Action::NextPage);

        assert_eq!(state.current_page, 1);
        assert!(state.pending.is_empty());
        assert_eq!(state.inventory_selected, 0);
    }

    #[test]
    fn test_goto_page_is_clamped() {
        let state = loaded_state(17, 8);

        let state = reduce(state, Action::GotoPage(9));

        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_prev_page_stops_at_zero() {
        let state = loaded_state(17, 8);

        let state = reduce(state, Action::PrevPage);

        assert_eq!(state.current_page, 0);
    }

    #[test]
    fn test_selection_clamped_to_visible_rows() {
        let mut state = loaded_state(3, 8);

        for _ in 0..10 {
            state = reduce(state, Action::SelectNext);
        }

        assert_eq!(state.inventory_selected, 2);
    }

    #[test]
    fn test_cart_selection_clamped_after_cart_shrinks() {
        let mut state = AppState::new(8);
        state.focus = Panel::Cart;
        state = reduce(
            state,
            Action::CartLoaded {
                cart: vec![
                    CartItem {
                        id: "1".to_string(),
                        content: "Apple".to_string(),
                        quantity: 2,
                    },
                    CartItem {
                        id: "2".to_string(),
                        content: "Pear".to_string(),
                        quantity: 1,
                    },
                ],
            },
        );
        state = reduce(state, Action::SelectNext);
        assert_eq!(state.cart_selected, 1);

        let state = reduce(
            state,
            Action::CartLoaded {
                cart: vec![CartItem {
                    id: "2".to_string(),
                    content: "Pear".to_string(),
                    quantity: 1,
                }],
            },
        );

        assert_eq!(state.cart_selected, 0);
    }

    #[test]
    fn test_cart_operations_do_not_touch_state() {
        let state = loaded_state(2, 8);
        let before = state.clone();

        for action in [
            Action::AddToCart,
            Action::DeleteFromCart,
            Action::Checkout,
            Action::Refresh,
        ] {
            let next = reduce(before.clone(), action);
            assert_eq!(next.inventory, state.inventory);
            assert_eq!(next.cart, state.cart);
            assert_eq!(next.current_page, state.current_page);
        }
    }

    #[test]
    fn test_inventory_shrink_pulls_page_back_into_range() {
        let state = loaded_state(17, 8);
        let state = reduce(state, Action::GotoPage(2));
        assert_eq!(state.current_page, 2);

        let state = reduce(
            state,
            Action::InventoryLoaded {
                inventory: vec![item("1", "Item")],
            },
        );

        assert_eq!(state.current_page, 0);
    }
}
