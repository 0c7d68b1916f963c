//! Application controller
//!
//! Owns the store, the page and the dispatcher. There is no global
//! state: every `AppState` is an independent shopping list.

use libshoplist::{
    render_page, render_store, selectors, Config, IdGenerator, IdSource, Page, Store,
};

use super::event::{Dispatcher, DomEvent};
use super::reducer::reduce;
use crate::error::{AppError, Result};

/// Root application state
pub struct AppState<P, G = IdSource> {
    store: Store<G>,
    page: P,
    dispatcher: Dispatcher,
    title: String,
}

impl<P: Page> AppState<P, IdSource> {
    /// Build the store, filter and empty-name policy from configuration
    pub fn from_config(config: &Config, page: P) -> Self {
        let mut store = Store::with_seed(config.id_source(), &config.list.seed);
        store.set_hide_completed(config.list.hide_completed);

        Self::new(store, page, config.input.allow_empty_names)
            .with_title(config.page.title.clone())
    }
}

impl<P: Page, G: IdGenerator> AppState<P, G> {
    pub fn new(store: Store<G>, page: P, allow_empty_names: bool) -> Self {
        Self {
            store,
            page,
            dispatcher: Dispatcher::new(allow_empty_names),
            title: "Shopping List".to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Initial render, then bind the four handlers
    ///
    /// Handlers are bound exactly once; a second call is an error.
    pub fn bootstrap(&mut self) -> Result<()> {
        if self.dispatcher.is_bound() {
            return Err(AppError::Binding("shopping list already bootstrapped".to_string()));
        }
        self.render();
        self.dispatcher.bind_shopping_list_handlers()
    }

    /// Process one page event
    ///
    /// A bound event runs its handler, applies at most one store change
    /// and re-renders once. Returns false when nothing was bound.
    pub fn handle(&mut self, event: &DomEvent) -> bool {
        let Some(action) = self.dispatcher.resolve(event, &mut self.page) else {
            tracing::trace!(?event, "no handler bound");
            return false;
        };

        if action.mutates() {
            reduce(&mut self.store, action);
        }
        self.render();
        true
    }

    /// Replace the list container with a fresh render of the store
    pub fn render(&mut self) {
        let markup = render_store(&self.store);
        self.page.replace_content(&selectors::LIST, markup);
    }
}

impl<P, G> AppState<P, G> {
    /// The whole document for the current state
    pub fn page_html(&self) -> String {
        render_page(&self.store, &self.title)
    }

    pub fn store(&self) -> &Store<G> {
        &self.store
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}
