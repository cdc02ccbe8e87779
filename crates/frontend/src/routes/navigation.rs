use contracts::system::router::{Location, NavigationOutcome, Navigator, Screen};
use leptos::prelude::*;

use super::hash::BrowserHash;
use crate::system::auth::context::AppStore;

/// Reactive wrapper around the [`Navigator`] bound to the browser hash.
///
/// `outcome` only changes when a pass selects something new, and `screen`
/// only when the selected screen itself changes, so views keyed on the
/// screen are not remounted when just the requested location differs.
#[derive(Clone, Copy)]
pub struct RouterContext {
    navigator: StoredValue<Navigator<BrowserHash>>,
    pub outcome: RwSignal<NavigationOutcome>,
    screen: Memo<Screen>,
    store: AppStore,
}

impl RouterContext {
    pub fn new(store: AppStore) -> Self {
        let outcome = RwSignal::new(NavigationOutcome::default());
        Self {
            navigator: StoredValue::new(Navigator::new(BrowserHash)),
            outcome,
            screen: screen_of(outcome),
            store,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen.get()
    }

    pub fn requested(&self) -> Location {
        self.outcome.with(|o| o.requested.clone())
    }

    /// `hashchange` listener body.
    pub fn handle_location_change(&self) {
        let outcome = self.store.state.with_untracked(|state| {
            self.navigator
                .try_update_value(|nav| nav.on_location_change(state).cloned())
                .flatten()
        });
        self.publish(outcome);
    }

    /// Re-resolve after login/logout.
    pub fn handle_session_change(&self) {
        let outcome = self.store.state.with_untracked(|state| {
            self.navigator
                .try_update_value(|nav| nav.on_session_change(state).clone())
        });
        self.publish(outcome);
    }

    /// Navigate programmatically (continuations, form results).
    pub fn go(&self, target: Location) {
        let outcome = self.store.state.with_untracked(|state| {
            self.navigator
                .try_update_value(|nav| nav.go(target, state).clone())
        });
        self.publish(outcome);
    }

    /// Navigate from a UI link; inert when the session may not leave its area.
    pub fn request(&self, target: Location) {
        let outcome = self.store.state.with_untracked(|state| {
            self.navigator
                .try_update_value(|nav| nav.request(target, state).cloned())
                .flatten()
        });
        self.publish(outcome);
    }

    fn publish(&self, outcome: Option<NavigationOutcome>) {
        let Some(outcome) = outcome else {
            return;
        };
        if self.outcome.with_untracked(|current| *current != outcome) {
            leptos::logging::log!(
                "🧭 screen: {} (requested {})",
                outcome.screen.name(),
                outcome.requested
            );
            self.outcome.set(outcome);
        }
    }
}

fn screen_of(outcome: RwSignal<NavigationOutcome>) -> Memo<Screen> {
    Memo::new(move |_| outcome.with(|o| o.screen.clone()))
}

/// Hook to access the router
pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_screen_views_ignore_requested_only_changes() {
        let owner = Owner::new();
        owner.set();

        let outcome = RwSignal::new(NavigationOutcome::default());
        let screen = screen_of(outcome);
        let renders = Arc::new(AtomicUsize::new(0));
        let view_key = {
            let renders = Arc::clone(&renders);
            Memo::new(move |_| {
                renders.fetch_add(1, Ordering::SeqCst);
                screen.get()
            })
        };

        assert_eq!(view_key.get(), Screen::Home);
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        // `#nope` typed while on home: requested changes, screen does not
        outcome.set(NavigationOutcome {
            requested: Location::Unknown,
            screen: Screen::Home,
            rewrite: Some(Location::Home),
        });
        assert_eq!(view_key.get(), Screen::Home);
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        outcome.set(NavigationOutcome {
            requested: Location::Auth,
            screen: Screen::Auth,
            rewrite: None,
        });
        assert_eq!(view_key.get(), Screen::Auth);
        assert_eq!(renders.load(Ordering::SeqCst), 2);
    }
}
