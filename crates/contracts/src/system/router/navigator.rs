//! Drives the resolver from location and session change events.
//!
//! The navigator owns the only path that writes locations. Every pass applies
//! at most one rewrite, and when the platform echoes that rewrite back as a
//! fresh change event the echo is consumed without another pass.

use log::debug;

use super::location::Location;
use super::resolver::{can_navigate, resolve};
use super::screen::Screen;
use crate::state::AppState;

/// Where the current fragment lives (browser URL, in-memory history, ...).
pub trait LocationSink {
    /// Current raw fragment, `#` included, empty for none.
    fn current(&self) -> String;

    /// Replace the fragment (given without `#`).
    ///
    /// Must return `false` and emit no change event when the value is already
    /// current; `true` when the location actually changed.
    fn write(&mut self, fragment: &str) -> bool;
}

/// Result of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationOutcome {
    /// Location as it was requested, before any rewrite.
    pub requested: Location,
    pub screen: Screen,
    pub rewrite: Option<Location>,
}

pub struct Navigator<S: LocationSink> {
    sink: S,
    pending_echo: Option<String>,
    outcome: NavigationOutcome,
}

impl<S: LocationSink> Navigator<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            pending_echo: None,
            outcome: NavigationOutcome::default(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn outcome(&self) -> &NavigationOutcome {
        &self.outcome
    }

    pub fn screen(&self) -> &Screen {
        &self.outcome.screen
    }

    /// Location-change signal. Returns `None` when the event is the echo of
    /// this navigator's own write.
    pub fn on_location_change(&mut self, state: &AppState) -> Option<&NavigationOutcome> {
        let raw = self.sink.current();
        if self.pending_echo.take().as_deref() == Some(raw.as_str()) {
            debug!("navigator: echo of {:?} consumed", raw);
            return None;
        }
        Some(self.pass(Location::parse(&raw), state, false))
    }

    /// Session-change signal: re-resolve whatever the location currently is.
    pub fn on_session_change(&mut self, state: &AppState) -> &NavigationOutcome {
        let raw = self.sink.current();
        self.pass(Location::parse(&raw), state, false)
    }

    /// Programmatic navigation (links, continuations).
    ///
    /// The target is resolved before anything is written, so a redirected
    /// target costs a single write of its final location.
    pub fn go(&mut self, target: Location, state: &AppState) -> &NavigationOutcome {
        self.pass(target, state, true)
    }

    /// Navigation requested from a UI link; ignored when the session may not
    /// leave its current area (see [`can_navigate`]).
    pub fn request(&mut self, target: Location, state: &AppState) -> Option<&NavigationOutcome> {
        if !can_navigate(&state.session, &target) {
            debug!("navigator: link to {} ignored for this session", target);
            return None;
        }
        Some(self.go(target, state))
    }

    /// `write_requested` is set when `requested` is not yet in the sink.
    fn pass(
        &mut self,
        requested: Location,
        state: &AppState,
        write_requested: bool,
    ) -> &NavigationOutcome {
        let resolution = resolve(&requested, &state.session, state.cart_is_empty());
        debug!(
            "navigator: {} -> {} (rewrite: {:?})",
            requested,
            resolution.screen.name(),
            resolution.rewrite.as_ref().map(Location::fragment)
        );
        match &resolution.rewrite {
            Some(rewrite) => self.write(rewrite),
            None if write_requested => self.write(&requested),
            None => {}
        }
        self.outcome = NavigationOutcome {
            requested,
            screen: resolution.screen,
            rewrite: resolution.rewrite,
        };
        &self.outcome
    }

    fn write(&mut self, location: &Location) {
        if self.sink.write(&location.fragment()) {
            self.pending_echo = Some(location.hash());
        }
    }
}

/// In-memory location holder, for tests and non-browser hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    hash: String,
    /// Fragments written so far, in order.
    pub writes: Vec<String>,
}

impl MemoryLocation {
    pub fn at(raw: &str) -> Self {
        Self {
            hash: raw.to_string(),
            writes: Vec::new(),
        }
    }

    /// Simulate the user typing a new fragment into the address bar.
    pub fn set_external(&mut self, raw: &str) {
        self.hash = raw.to_string();
    }
}

impl LocationSink for MemoryLocation {
    fn current(&self) -> String {
        self.hash.clone()
    }

    fn write(&mut self, fragment: &str) -> bool {
        let next = if fragment.is_empty() {
            String::new()
        } else {
            format!("#{}", fragment)
        };
        if next == self.hash {
            return false;
        }
        self.hash = next;
        self.writes.push(fragment.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;
    use crate::system::auth::{Role, User};
    use crate::system::router::continuation::{after_login, after_logout};

    fn navigator_at(raw: &str) -> Navigator<MemoryLocation> {
        Navigator::new(MemoryLocation::at(raw))
    }

    fn customer_state(with_items: bool) -> AppState {
        let mut state = AppState::default();
        state
            .apply(Action::Login(User::from_email("bia@exemplo.com")))
            .unwrap();
        if with_items {
            let product = state.catalog.find("1").unwrap().clone();
            state.apply(Action::AddToCart(product)).unwrap();
        }
        state
    }

    fn admin_state() -> AppState {
        let mut state = AppState::default();
        state
            .apply(Action::Login(User::from_email("admin@lumina.com")))
            .unwrap();
        state
    }

    #[test]
    fn test_unknown_fragment_is_normalized_once() {
        let state = AppState::default();
        let mut nav = navigator_at("#nope");
        let outcome = nav.on_location_change(&state).unwrap().clone();
        assert_eq!(outcome.screen, Screen::Home);
        assert_eq!(outcome.requested, Location::Unknown);
        assert_eq!(nav.sink().current(), "");
        assert_eq!(nav.sink().writes, vec![String::new()]);

        // the browser echoes the rewrite back
        assert!(nav.on_location_change(&state).is_none());
        assert_eq!(nav.sink().writes.len(), 1);
        assert_eq!(nav.screen(), &Screen::Home);
    }

    #[test]
    fn test_anonymous_checkout_goes_to_auth() {
        let state = AppState::default();
        let mut nav = navigator_at("#checkout");
        let outcome = nav.on_location_change(&state).unwrap();
        assert_eq!(outcome.screen, Screen::Auth);
        assert_eq!(outcome.requested, Location::CheckoutRequest);
        assert_eq!(nav.sink().current(), "#auth");
    }

    #[test]
    fn test_redirected_go_writes_once() {
        let mut state = AppState::default();
        let product = state.catalog.find("1").unwrap().clone();
        state.apply(Action::AddToCart(product)).unwrap();

        let mut nav = navigator_at("");
        let outcome = nav.go(Location::CheckoutRequest, &state).clone();
        assert_eq!(outcome.screen, Screen::Auth);
        assert_eq!(outcome.requested, Location::CheckoutRequest);
        assert_eq!(nav.sink().writes, vec!["auth".to_string()]);

        // the single hashchange is our own write
        assert!(nav.on_location_change(&state).is_none());
        assert_eq!(nav.outcome().requested, Location::CheckoutRequest);
        assert_eq!(nav.sink().writes.len(), 1);
    }

    #[test]
    fn test_writing_current_value_is_noop() {
        let state = AppState::default();
        let mut nav = navigator_at("");
        nav.go(Location::Home, &state);
        assert!(nav.sink().writes.is_empty());
        // no echo is expected, so the next real event is resolved
        assert!(nav.on_location_change(&state).is_some());
    }

    #[test]
    fn test_login_flow_with_items_reaches_checkout() {
        let anonymous = {
            let mut s = customer_state(true);
            s.apply(Action::Logout).unwrap();
            s
        };
        let mut nav = navigator_at("#checkout");
        nav.on_location_change(&anonymous);
        assert_eq!(nav.screen(), &Screen::Auth);
        nav.on_location_change(&anonymous);

        let signed_in = customer_state(true);
        let next = after_login(Role::Customer, signed_in.cart_is_empty());
        nav.go(next, &signed_in);
        assert_eq!(nav.screen(), &Screen::Checkout);
        assert_eq!(nav.sink().current(), "#checkout");
    }

    #[test]
    fn test_session_change_on_auth_page_continues() {
        let mut nav = navigator_at("#auth");
        nav.on_location_change(&AppState::default());
        assert_eq!(nav.screen(), &Screen::Auth);

        let outcome = nav.on_session_change(&customer_state(false)).clone();
        assert_eq!(outcome.screen, Screen::Home);
        assert_eq!(outcome.rewrite, Some(Location::Home));
        assert_eq!(nav.sink().current(), "");
    }

    #[test]
    fn test_admin_is_pinned_to_back_office() {
        let state = admin_state();
        let mut nav = navigator_at("#admin");
        nav.on_location_change(&state);
        assert_eq!(nav.screen(), &Screen::Admin);
        assert!(nav.sink().writes.is_empty());

        nav.sink_mut().set_external("#product/1");
        nav.on_location_change(&state);
        assert_eq!(nav.screen(), &Screen::Admin);
        assert_eq!(nav.sink().current(), "#admin");

        assert!(nav.request(Location::Home, &state).is_none());
        assert_eq!(nav.sink().current(), "#admin");
    }

    #[test]
    fn test_logout_returns_home() {
        let mut state = admin_state();
        let mut nav = navigator_at("#admin");
        nav.on_location_change(&state);

        state.apply(Action::Logout).unwrap();
        nav.go(after_logout(), &state);
        assert_eq!(nav.screen(), &Screen::Home);
        assert_eq!(nav.sink().current(), "");
    }

    #[test]
    fn test_product_link_keeps_id() {
        let state = customer_state(false);
        let mut nav = navigator_at("");
        let outcome = nav.request(Location::product("3"), &state).unwrap();
        assert_eq!(outcome.screen.product_id(), Some("3"));
        assert_eq!(nav.sink().current(), "#product/3");

        nav.go(Location::Home, &state);
        assert_eq!(nav.screen().product_id(), None);
    }
}
