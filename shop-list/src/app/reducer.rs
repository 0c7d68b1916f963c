//! Reducer for store transitions
//!
//! Applies exactly one store operation per action. No page access, no
//! rendering; the controller re-renders after every call.

use libshoplist::{IdGenerator, Store};

use super::actions::Action;

/// Apply `action` to `store`
///
/// Unknown ids are silent no-ops, matching the store's own contract.
pub fn reduce<G: IdGenerator>(store: &mut Store<G>, action: Action) {
    match action {
        Action::AddItem(name) => {
            let id = store.add_item(name);
            tracing::debug!(%id, "item added");
        }

        Action::ToggleChecked(id) => {
            if !store.toggle_checked(&id) {
                tracing::trace!(%id, "toggle on unknown item ignored");
            }
        }

        Action::DeleteItem(id) => {
            if store.delete_item(&id).is_none() {
                tracing::trace!(%id, "delete on unknown item ignored");
            }
        }

        Action::ToggleHideCompleted => {
            let hide = !store.hide_completed();
            store.set_hide_completed(hide);
            tracing::debug!(hide_completed = hide, "filter toggled");
        }

        Action::Ignore => {}
    }
}
