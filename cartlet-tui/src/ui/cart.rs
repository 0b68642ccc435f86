//! Cart panel

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use libcartlet::types::CartItem;

use crate::app::{AppState, Panel};

/// Render the cart panel
pub fn render_cart(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" Cart ({} entries) ", state.cart.len()))
        .borders(Borders::ALL)
        .border_style(super::panel_border(state, Panel::Cart));

    let rows: Vec<ListItem> = state
        .cart
        .iter()
        .map(|entry| ListItem::new(cart_row_text(entry)))
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.cart.is_empty() {
        list_state.select(Some(state.cart_selected.min(state.cart.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// One cart row: `"{content} x {quantity}"`
pub fn cart_row_text(item: &CartItem) -> String {
    format!("{} x {}", item.content, item.quantity)
}
