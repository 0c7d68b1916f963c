//! Core types for the shopping list

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Opaque item identifier
///
/// Equality is the only meaning an id carries; no ordering is implied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

/// A single shopping list entry
///
/// `id` and `name` are fixed at creation. `checked` only changes
/// through [`crate::store::Store::toggle_checked`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    pub(crate) checked: bool,
}

impl Item {
    pub(crate) fn new(id: ItemId, name: String, checked: bool) -> Self {
        Self { id, name, checked }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

/// Seed entry loaded from configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

impl SeedItem {
    pub fn new(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            checked,
        }
    }

    /// The demonstration list shown on first load
    pub fn demo() -> Vec<SeedItem> {
        vec![
            SeedItem::new("apples", false),
            SeedItem::new("oranges", false),
            SeedItem::new("milk", true),
            SeedItem::new("bread", false),
        ]
    }
}
