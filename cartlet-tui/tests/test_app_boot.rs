//! Test application initialization
//!
//! Verifies that the app initializes with correct defaults based on
//! configuration and environment variables.

use cartlet_tui::app::{AppState, Panel};

#[test]
fn test_app_starts_on_inventory_panel() {
    let state = AppState::new(8);

    assert_eq!(state.focus, Panel::Inventory);
    assert!(!state.should_quit);
}

#[test]
fn test_lists_start_empty() {
    let state = AppState::new(8);

    assert!(state.inventory.is_empty());
    assert!(state.cart.is_empty());
    assert!(state.pending.is_empty());
}

#[test]
fn test_app_starts_on_page_zero() {
    let state = AppState::new(8);

    assert_eq!(state.current_page, 0);
    assert_eq!(state.page_count(), 0);
}

#[test]
fn test_help_hidden_by_default() {
    let state = AppState::new(8);

    assert!(!state.help_visible);
}

#[test]
fn test_page_size_comes_from_caller() {
    let state = AppState::new(4);

    assert_eq!(state.page_size, 4);
}

#[test]
fn test_default_page_size_is_eight() {
    let state = AppState::default();

    assert_eq!(state.page_size, 8);
}

#[test]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let state = AppState::new(8);
    std::env::remove_var("NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
fn test_tick_rate_from_env() {
    std::env::set_var("CARTLET_TUI_TICK_MS", "250");
    let state = AppState::new(8);
    std::env::remove_var("CARTLET_TUI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 250);
}
