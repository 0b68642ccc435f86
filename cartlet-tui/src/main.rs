//! cartlet-tui - terminal storefront cart client
//!
//! Fetches the inventory and cart from a REST backend, renders them as
//! paginated lists, and synchronizes quantity staging, adds, deletes, and
//! checkout back to the server.

use clap::Parser;
use std::path::PathBuf;

use libcartlet::logging::{LogFormat, LoggingConfig};
use libcartlet::{Config, StoreEvent};

use cartlet_tui::app::event::{EventHandler, TuiEvent};
use cartlet_tui::app::{map_key, reduce, Action, AppState};
use cartlet_tui::error::Result;
use cartlet_tui::services::ServiceHandle;
use cartlet_tui::terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui};
use cartlet_tui::ui;

#[derive(Parser, Debug)]
#[command(name = "cartlet-tui")]
#[command(about = "Terminal storefront cart client", long_about = None)]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long, env = "CARTLET_API_URL")]
    api_url: Option<String>,

    /// Inventory rows per page (overrides the config file)
    #[arg(long)]
    page_size: Option<usize>,

    /// Path to an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum log level written to stderr
    #[arg(long, default_value = "error")]
    log_level: String,

    /// Log output format (text, json, or pretty)
    #[arg(long, default_value = "text")]
    log_format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = cli.log_format.parse().unwrap_or(LogFormat::Text);
    LoggingConfig::new(format, cli.log_level.clone()).init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load_or_default()?,
    };
    config.apply_env();
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if let Some(size) = cli.page_size {
        config.ui.page_size = size;
    }

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, config);

    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, config: Config) -> Result<()> {
    let mut state = AppState::new(config.ui.page_size);

    let services = ServiceHandle::new(config)?;
    let store_events = services.subscribe();

    // Initial population: two independent fetches, exactly like the page
    // load of the original
    services.refresh_inventory();
    services.refresh_cart();

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) => map_key(&state, key),
            TuiEvent::Resize(w, h) => Some(Action::Resize(w, h)),
            TuiEvent::Tick => None,
        };

        if let Some(action) = action {
            // Run the network half before reducing so it sees the staged
            // quantity and selection exactly as the key press did
            dispatch_side_effects(&action, &state, &services);

            state = reduce(state, action.clone());

            // Page flips publish no store event; mirror the clamped page
            // into the store explicitly
            if matches!(
                action,
                Action::PrevPage | Action::NextPage | Action::GotoPage(_)
            ) {
                services.set_page(state.current_page);
            }
        }

        // Apply store notifications in arrival order (last response wins)
        while let Ok(event) = store_events.try_recv() {
            let action = match event {
                StoreEvent::InventoryChanged { inventory } => Action::InventoryLoaded { inventory },
                StoreEvent::CartChanged { cart } => Action::CartLoaded { cart },
            };
            state = reduce(state, action);
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run the network side of an action, if it has one
fn dispatch_side_effects(action: &Action, state: &AppState, services: &ServiceHandle) {
    match action {
        Action::AddToCart => {
            if let Some(item) = state.selected_item() {
                let staged = state.pending_for(&item.id);
                services.add_to_cart(item.clone(), staged);
            }
        }
        Action::DeleteFromCart => {
            if let Some(entry) = state.selected_cart_item() {
                services.delete_item(entry.id.clone());
            }
        }
        Action::Checkout => services.checkout(),
        Action::Refresh => {
            services.refresh_inventory();
            services.refresh_cart();
        }
        _ => {}
    }
}
