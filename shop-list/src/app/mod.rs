//! Application module
//!
//! Contains the page-side architecture:
//! - Actions: what a handler asks the store to do
//! - Event: delegated bindings that turn page events into actions
//! - Reducer: the one place store mutations are applied
//! - State: the controller owning store, page and dispatcher
//!
//! Control flow is always event -> action -> store mutation -> full
//! re-render.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use event::{Dispatcher, DomEvent, EventKind, EventTarget, Handler};
pub use reducer::reduce;
pub use state::AppState;
