//! Actions for the reducer pattern
//!
//! Handlers never touch the store directly. They produce one of these
//! and the reducer applies it.

use libshoplist::ItemId;

/// Store transitions requested by event handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a new unchecked item
    AddItem(String),

    /// Flip the checked state of an item
    ToggleChecked(ItemId),

    /// Remove an item
    DeleteItem(ItemId),

    /// Flip the hide-completed filter
    ToggleHideCompleted,

    /// The handler ran but has nothing to change
    Ignore,
}

impl Action {
    /// Whether applying this action may change the store
    pub fn mutates(&self) -> bool {
        !matches!(self, Action::Ignore)
    }
}
