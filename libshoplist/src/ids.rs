//! Item id generation
//!
//! The store only needs "a fresh unique id on demand". Random UUIDs are
//! the default; sequential ids make sessions reproducible.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::ItemId;

/// Source of fresh item ids
///
/// Implementations must never hand out the same id twice.
pub trait IdGenerator {
    fn generate(&mut self) -> ItemId;
}

/// Id strategy selected in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

/// Built-in id generators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdSource {
    /// Random v4 UUIDs
    Uuid,
    /// `"{prefix}-{n}"` with `n` counting up from 1
    Sequential { prefix: String, next: u64 },
}

impl IdSource {
    pub fn uuid() -> Self {
        IdSource::Uuid
    }

    pub fn sequential(prefix: impl Into<String>) -> Self {
        IdSource::Sequential {
            prefix: prefix.into(),
            next: 1,
        }
    }

    pub fn from_strategy(strategy: IdStrategy, prefix: &str) -> Self {
        match strategy {
            IdStrategy::Uuid => Self::uuid(),
            IdStrategy::Sequential => Self::sequential(prefix),
        }
    }
}

impl Default for IdSource {
    fn default() -> Self {
        Self::uuid()
    }
}

impl IdGenerator for IdSource {
    fn generate(&mut self) -> ItemId {
        match self {
            IdSource::Uuid => ItemId::new(Uuid::new_v4().to_string()),
            IdSource::Sequential { prefix, next } => {
                let id = ItemId::new(format!("{}-{}", prefix, next));
                *next += 1;
                id
            }
        }
    }
}
