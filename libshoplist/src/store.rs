//! The shopping list store
//!
//! Single source of truth for the list: the ordered items plus the
//! hide-completed flag. Operations here only mutate state. Rendering and
//! event handling live elsewhere and read the store after each change.

use serde::Serialize;

use crate::ids::{IdGenerator, IdSource};
use crate::types::{Item, ItemId, SeedItem};

/// Items in display order plus the view filter flag
#[derive(Debug, Clone)]
pub struct Store<G = IdSource> {
    items: Vec<Item>,
    hide_completed: bool,
    ids: G,
}

/// Serializable view of the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    pub items: Vec<Item>,
    pub hide_completed: bool,
}

impl<G: IdGenerator> Store<G> {
    /// Empty store
    pub fn new(ids: G) -> Self {
        Self {
            items: Vec::new(),
            hide_completed: false,
            ids,
        }
    }

    /// Store pre-filled with seed items, each given a fresh id
    pub fn with_seed(ids: G, seed: &[SeedItem]) -> Self {
        let mut store = Self::new(ids);
        for entry in seed {
            let id = store.ids.generate();
            store
                .items
                .push(Item::new(id, entry.name.clone(), entry.checked));
        }
        store
    }

    /// Store holding the four demonstration items
    pub fn demo(ids: G) -> Self {
        Self::with_seed(ids, &SeedItem::demo())
    }

    /// Append a new unchecked item and return its id
    pub fn add_item(&mut self, name: impl Into<String>) -> ItemId {
        let id = self.ids.generate();
        self.items.push(Item::new(id.clone(), name.into(), false));
        id
    }

    /// Flip `checked` on the item with `id`
    ///
    /// Returns false and changes nothing when no item has that id.
    pub fn toggle_checked(&mut self, id: &ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Remove the item with `id`, keeping the order of the rest
    pub fn delete_item(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn set_hide_completed(&mut self, value: bool) {
        self.hide_completed = value;
    }
}

impl<G> Store<G> {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn hide_completed(&self) -> bool {
        self.hide_completed
    }

    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items that survive the hide-completed filter, in order
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> + '_ {
        let hide = self.hide_completed;
        self.items.iter().filter(move |item| !(hide && item.is_checked()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            items: self.items.clone(),
            hide_completed: self.hide_completed,
        }
    }
}

impl Default for Store<IdSource> {
    fn default() -> Self {
        Self::new(IdSource::default())
    }
}
