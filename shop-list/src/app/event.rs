//! Event handling infrastructure
//!
//! Page events (form submission, clicks) arrive as [`DomEvent`]s. The
//! [`Dispatcher`] holds the delegated bindings and turns a matching event
//! into an [`Action`] for the reducer.
//!
//! Per-item controls carry no id in their markup. The event target
//! reports the id of the row it was clicked in through
//! [`EventTarget::item_id`], so handlers never inspect page structure.

use libshoplist::{selectors, ItemId, Page, Selector};

use crate::app::Action;
use crate::error::{AppError, Result};

/// Kinds of page events the shopping list listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Submit,
    Click,
}

/// The element an event originated from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTarget {
    selector: Selector,
    container: Option<Selector>,
    item_id: Option<ItemId>,
}

impl EventTarget {
    /// A standalone element such as the form or the hide-completed control
    pub fn element(selector: Selector) -> Self {
        Self {
            selector,
            container: None,
            item_id: None,
        }
    }

    /// A control inside the rendered row for `item_id`
    pub fn within_item(selector: Selector, item_id: ItemId) -> Self {
        Self {
            selector,
            container: Some(selectors::LIST),
            item_id: Some(item_id),
        }
    }

    pub fn selector(&self) -> Selector {
        self.selector
    }

    /// Id of the list row that owns this element, if any
    pub fn item_id(&self) -> Option<&ItemId> {
        self.item_id.as_ref()
    }
}

/// An event delivered by the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: EventTarget,
}

impl DomEvent {
    pub fn submit(form: Selector) -> Self {
        Self {
            kind: EventKind::Submit,
            target: EventTarget::element(form),
        }
    }

    pub fn click(target: EventTarget) -> Self {
        Self {
            kind: EventKind::Click,
            target,
        }
    }
}

/// The four shopping list handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    NewItemSubmit,
    ItemToggle,
    ItemDelete,
    HideCompletedToggle,
}

#[derive(Debug, Clone)]
struct Binding {
    kind: EventKind,
    root: Selector,
    selector: Selector,
    handler: Handler,
}

impl Binding {
    fn matches(&self, event: &DomEvent) -> bool {
        if self.kind != event.kind || self.selector != event.target.selector {
            return false;
        }
        // Delegated bindings only see events bubbling out of their root
        self.root == self.selector || event.target.container == Some(self.root)
    }
}

/// Registry of delegated bindings
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    bindings: Vec<Binding>,
    allow_empty_names: bool,
}

impl Dispatcher {
    pub fn new(allow_empty_names: bool) -> Self {
        Self {
            bindings: Vec::new(),
            allow_empty_names,
        }
    }

    /// Register `handler` for `kind` events on `selector` under `root`
    ///
    /// Pass the same selector as `root` for a direct binding. A second
    /// binding for the same kind and selector is rejected; it would fire
    /// the handler twice per event.
    pub fn bind(
        &mut self,
        kind: EventKind,
        root: Selector,
        selector: Selector,
        handler: Handler,
    ) -> Result<()> {
        if self
            .bindings
            .iter()
            .any(|b| b.kind == kind && b.selector == selector)
        {
            return Err(AppError::Binding(format!(
                "{:?} on {} already bound",
                kind, selector
            )));
        }

        tracing::debug!(?kind, %root, %selector, ?handler, "binding handler");
        self.bindings.push(Binding {
            kind,
            root,
            selector,
            handler,
        });
        Ok(())
    }

    /// Install the submit, toggle, delete and hide-completed handlers
    pub fn bind_shopping_list_handlers(&mut self) -> Result<()> {
        self.bind(
            EventKind::Submit,
            selectors::NEW_ITEM_FORM,
            selectors::NEW_ITEM_FORM,
            Handler::NewItemSubmit,
        )?;
        self.bind(
            EventKind::Click,
            selectors::LIST,
            selectors::ITEM_TOGGLE,
            Handler::ItemToggle,
        )?;
        self.bind(
            EventKind::Click,
            selectors::LIST,
            selectors::ITEM_DELETE,
            Handler::ItemDelete,
        )?;
        self.bind(
            EventKind::Click,
            selectors::HIDE_COMPLETED_TOGGLE,
            selectors::HIDE_COMPLETED_TOGGLE,
            Handler::HideCompletedToggle,
        )
    }

    pub fn is_bound(&self) -> bool {
        !self.bindings.is_empty()
    }

    /// Handler bound for this event, if any
    pub fn handler_for(&self, event: &DomEvent) -> Option<Handler> {
        self.bindings
            .iter()
            .find(|b| b.matches(event))
            .map(|b| b.handler)
    }

    /// Run the handler bound for `event` and return the action it produced
    ///
    /// `None` means nothing is bound for the event. The submit handler
    /// reads and clears the entry field on `page`.
    pub fn resolve<P: Page>(&self, event: &DomEvent, page: &mut P) -> Option<Action> {
        let handler = self.handler_for(event)?;
        tracing::debug!(?handler, "handler ran");

        let action = match handler {
            Handler::NewItemSubmit => self.submit_new_item(page),
            Handler::ItemToggle => event
                .target
                .item_id()
                .cloned()
                .map_or(Action::Ignore, Action::ToggleChecked),
            Handler::ItemDelete => event
                .target
                .item_id()
                .cloned()
                .map_or(Action::Ignore, Action::DeleteItem),
            Handler::HideCompletedToggle => Action::ToggleHideCompleted,
        };
        Some(action)
    }

    fn submit_new_item<P: Page>(&self, page: &mut P) -> Action {
        let raw = page.field_value(&selectors::NEW_ITEM_ENTRY);
        page.set_field_value(&selectors::NEW_ITEM_ENTRY, String::new());

        let name = raw.trim();
        if name.is_empty() && !self.allow_empty_names {
            tracing::debug!("ignoring empty submission");
            return Action::Ignore;
        }
        Action::AddItem(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libshoplist::HeadlessPage;

    fn bound(allow_empty_names: bool) -> Dispatcher {
        let mut dispatcher = Dispatcher::new(allow_empty_names);
        dispatcher.bind_shopping_list_handlers().unwrap();
        dispatcher
    }

    fn typed(value: &str) -> HeadlessPage {
        let mut page = HeadlessPage::new();
        page.set_field_value(&selectors::NEW_ITEM_ENTRY, value.to_string());
        page
    }

    #[test]
    fn test_unbound_dispatcher_resolves_nothing() {
        let dispatcher = Dispatcher::new(false);
        let mut page = typed("eggs");

        assert!(!dispatcher.is_bound());
        let event = DomEvent::submit(selectors::NEW_ITEM_FORM);
        assert_eq!(dispatcher.resolve(&event, &mut page), None);
        // Nothing ran, so the field is untouched
        assert_eq!(page.field_value(&selectors::NEW_ITEM_ENTRY), "eggs");
    }

    #[test]
    fn test_double_binding_rejected() {
        let mut dispatcher = bound(false);
        let err = dispatcher.bind_shopping_list_handlers().unwrap_err();
        assert!(matches!(err, AppError::Binding(_)));
    }

    #[test]
    fn test_submit_reads_and_clears_entry() {
        let dispatcher = bound(false);
        let mut page = typed("  eggs ");

        let event = DomEvent::submit(selectors::NEW_ITEM_FORM);
        let action = dispatcher.resolve(&event, &mut page);

        assert_eq!(action, Some(Action::AddItem("eggs".to_string())));
        assert_eq!(page.field_value(&selectors::NEW_ITEM_ENTRY), "");
    }

    #[test]
    fn test_blank_submit_ignored_by_default() {
        let dispatcher = bound(false);
        let mut page = typed("   ");

        let event = DomEvent::submit(selectors::NEW_ITEM_FORM);
        assert_eq!(dispatcher.resolve(&event, &mut page), Some(Action::Ignore));
        assert_eq!(page.field_value(&selectors::NEW_ITEM_ENTRY), "");
    }

    #[test]
    fn test_blank_submit_allowed_when_permissive() {
        let dispatcher = bound(true);
        let mut page = typed("   ");

        let event = DomEvent::submit(selectors::NEW_ITEM_FORM);
        assert_eq!(
            dispatcher.resolve(&event, &mut page),
            Some(Action::AddItem(String::new()))
        );
    }

    #[test]
    fn test_toggle_click_uses_row_id() {
        let dispatcher = bound(false);
        let mut page = HeadlessPage::new();
        let id = ItemId::new("item-3");

        let event = DomEvent::click(EventTarget::within_item(selectors::ITEM_TOGGLE, id.clone()));
        assert_eq!(
            dispatcher.resolve(&event, &mut page),
            Some(Action::ToggleChecked(id))
        );
    }

    #[test]
    fn test_delete_click_uses_row_id() {
        let dispatcher = bound(false);
        let mut page = HeadlessPage::new();
        let id = ItemId::new("item-2");

        let event = DomEvent::click(EventTarget::within_item(selectors::ITEM_DELETE, id.clone()));
        assert_eq!(
            dispatcher.resolve(&event, &mut page),
            Some(Action::DeleteItem(id))
        );
    }

    #[test]
    fn test_item_controls_outside_list_are_not_delegated() {
        let dispatcher = bound(false);
        let mut page = HeadlessPage::new();

        let event = DomEvent::click(EventTarget::element(selectors::ITEM_TOGGLE));
        assert_eq!(dispatcher.resolve(&event, &mut page), None);
    }

    #[test]
    fn test_hide_completed_click() {
        let dispatcher = bound(false);
        let mut page = HeadlessPage::new();

        let event = DomEvent::click(EventTarget::element(selectors::HIDE_COMPLETED_TOGGLE));
        assert_eq!(
            dispatcher.resolve(&event, &mut page),
            Some(Action::ToggleHideCompleted)
        );
    }

    #[test]
    fn test_kind_must_match() {
        let dispatcher = bound(false);
        let event = DomEvent {
            kind: EventKind::Submit,
            target: EventTarget::element(selectors::HIDE_COMPLETED_TOGGLE),
        };
        assert_eq!(dispatcher.handler_for(&event), None);
    }
}
