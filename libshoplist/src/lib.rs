//! Shoplist - an in-memory shopping list with a full re-render loop
//!
//! The [`store::Store`] holds the items and the hide-completed flag,
//! [`render`] turns that state into markup, and [`page::Page`] is the
//! narrow contract through which handlers touch the document.

pub mod config;
pub mod error;
pub mod ids;
pub mod logging;
pub mod page;
pub mod render;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, Result, ShopListError};
pub use ids::{IdGenerator, IdSource, IdStrategy};
pub use page::{selectors, HeadlessPage, Page, Selector};
pub use render::{parse_item_ids, render, render_page, render_store};
pub use store::{Store, StoreSnapshot};
pub use types::{Item, ItemId, SeedItem};
