//! Error types for cartlet-tui

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Service layer error
    #[error("Service error: {0}")]
    Service(#[from] libcartlet::CartletError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
