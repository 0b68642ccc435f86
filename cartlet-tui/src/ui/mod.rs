//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames;
//! no side effects beyond drawing.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, Panel};

pub mod cart;
pub mod inventory;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Panels
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[0]);

    inventory::render_inventory(frame, panels[0], state);
    cart::render_cart(frame, panels[1], state);
    render_status_bar(frame, chunks[1], state);

    if state.help_visible {
        render_help_overlay(frame, area);
    }
}

/// Border style for a panel, highlighting the focused one
pub(crate) fn panel_border(state: &AppState, panel: Panel) -> Style {
    if state.config.colors_enabled && state.focus == panel {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Render the hint line at the bottom
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.focus {
        Panel::Inventory => "+/-: qty | a: add | \u{2190}/\u{2192}: page | 1-9: go to page | Tab: cart | r: refresh | ?: help | q: quit",
        Panel::Cart => "d: delete | c: checkout | Tab: inventory | r: refresh | ?: help | q: quit",
    };

    let status = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::Gray),
    )))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q        - Quit"),
        Line::from("  Tab      - Switch panel"),
        Line::from("  Up/Down  - Move selection"),
        Line::from("  r        - Refresh from server"),
        Line::from("  c        - Checkout (empty the cart)"),
        Line::from(""),
        Line::from("Inventory:"),
        Line::from("  + / -    - Stage quantity for the selected item"),
        Line::from("  a, Enter - Add staged quantity to the cart"),
        Line::from("  Left/Right - Previous / next page"),
        Line::from("  1-9      - Jump to page"),
        Line::from(""),
        Line::from("Cart:"),
        Line::from("  d        - Delete the selected entry"),
        Line::from(""),
        Line::from("Press Esc or ? to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area); // Clear background
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
