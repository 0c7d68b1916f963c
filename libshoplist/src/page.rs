//! Page contract
//!
//! The narrow slice of a document the shopping list needs: read and
//! write a form field, replace a container's content with markup. The
//! headless implementation keeps everything in memory and is what the
//! console driver and the tests run against.

use std::collections::HashMap;
use std::fmt;

use crate::render::parse_item_ids;
use crate::types::ItemId;

/// CSS-style selector naming an element on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector(&'static str);

impl Selector {
    pub const fn new(selector: &'static str) -> Self {
        Self(selector)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Stable selector conventions shared by the renderer and the dispatcher
pub mod selectors {
    use super::Selector;

    pub const NEW_ITEM_FORM: Selector = Selector::new("#js-shopping-list-form");
    pub const NEW_ITEM_ENTRY: Selector = Selector::new(".js-shopping-list-entry");
    pub const LIST: Selector = Selector::new(".js-shopping-list");
    pub const ITEM_TOGGLE: Selector = Selector::new(".js-item-toggle");
    pub const ITEM_DELETE: Selector = Selector::new(".js-item-delete");
    pub const HIDE_COMPLETED_TOGGLE: Selector = Selector::new(".js-hide-completed-toggle");
}

/// What handlers may do to the page
pub trait Page {
    /// Current value of a form field (empty when unset)
    fn field_value(&self, selector: &Selector) -> String;

    fn set_field_value(&mut self, selector: &Selector, value: String);

    /// Replace everything inside a container with `markup`
    fn replace_content(&mut self, selector: &Selector, markup: String);

    fn content(&self, selector: &Selector) -> Option<&str>;
}

/// In-memory page
#[derive(Debug, Default, Clone)]
pub struct HeadlessPage {
    fields: HashMap<Selector, String>,
    containers: HashMap<Selector, String>,
    replacements: usize,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of container replacements performed so far
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    /// Ids of the rows currently shown in the list container
    pub fn rendered_item_ids(&self) -> Vec<ItemId> {
        self.content(&selectors::LIST)
            .map(parse_item_ids)
            .unwrap_or_default()
    }
}

impl Page for HeadlessPage {
    fn field_value(&self, selector: &Selector) -> String {
        self.fields.get(selector).cloned().unwrap_or_default()
    }

    fn set_field_value(&mut self, selector: &Selector, value: String) {
        self.fields.insert(*selector, value);
    }

    fn replace_content(&mut self, selector: &Selector, markup: String) {
        self.replacements += 1;
        self.containers.insert(*selector, markup);
    }

    fn content(&self, selector: &Selector) -> Option<&str> {
        self.containers.get(selector).map(String::as_str)
    }
}
