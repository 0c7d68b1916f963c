//! Error types for shop-list
//!
//! Wraps core library errors and IO errors, plus the failures that only
//! exist at the page-driver level: duplicate handler bindings and
//! malformed console commands.

use thiserror::Error;

/// shop-list errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Core library error
    #[error(transparent)]
    Core(#[from] libshoplist::ShopListError),

    /// Console/IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Handler binding error
    #[error("Binding error: {0}")]
    Binding(String),

    /// Unparseable or out-of-range console command
    #[error("Command error: {0}")]
    Command(String),
}

impl AppError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Core(e) => e.exit_code(),
            AppError::Command(_) => 3,
            AppError::Io(_) | AppError::Serialize(_) | AppError::Binding(_) => 1,
        }
    }
}

/// Result type for shop-list operations
pub type Result<T> = std::result::Result<T, AppError>;
