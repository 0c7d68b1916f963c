//! shop-list library
//!
//! Exports the page driver pieces for testing and reuse.

pub mod app;
pub mod console;
pub mod error;

// Re-export commonly used types
pub use app::{reduce, Action, AppState, Dispatcher, DomEvent, EventTarget};
pub use error::{AppError, Result};
