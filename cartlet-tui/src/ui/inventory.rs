//! Inventory panel: the paginated catalog with staged-quantity counters

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use libcartlet::types::InventoryItem;

use crate::app::{AppState, Panel};

/// Render the inventory panel with its pagination strip
pub fn render_inventory(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" Inventory ({} items) ", state.inventory.len()))
        .borders(Borders::ALL)
        .border_style(super::panel_border(state, Panel::Inventory));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Rows
            Constraint::Length(1), // Pagination strip
        ])
        .split(inner);

    let visible = state.visible_inventory();
    let rows: Vec<ListItem> = visible
        .iter()
        .map(|item| ListItem::new(row_label(item, state.pending_for(&item.id))))
        .collect();

    let list = List::new(rows)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !visible.is_empty() {
        list_state.select(Some(state.inventory_selected.min(visible.len() - 1)));
    }

    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    frame.render_widget(
        Paragraph::new(pagination_line(state.page_count(), state.current_page)),
        chunks[1],
    );
}

/// One inventory row: content plus its staged counter
pub fn row_label(item: &InventoryItem, staged: i64) -> String {
    format!("{}  [-] {} [+]", item.content, staged)
}

/// 1-indexed page labels, one per page
pub fn pagination_labels(pages: usize) -> Vec<String> {
    (1..=pages).map(|n| n.to_string()).collect()
}

/// The pagination strip, current page bracketed
fn pagination_line(pages: usize, current: usize) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, label) in pagination_labels(pages).into_iter().enumerate() {
        if index == current {
            spans.push(Span::styled(
                format!("[{}]", label),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(format!(" {} ", label)));
        }
    }
    Line::from(spans)
}
