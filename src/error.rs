// Startup error types
// Request-level failures are handled in place; these are the fatal ones.

use thiserror::Error;

/// Errors that abort server startup.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("failed to bind listener: {0}")]
    Bind(#[from] std::io::Error),
}
