//! Access-control decision table.
//!
//! Maps (location, session, cart emptiness) to the screen to render plus an
//! optional location rewrite. Total and side-effect free: applying the rewrite
//! is the caller's job (see [`super::navigator::Navigator`]).

use serde::{Deserialize, Serialize};

use super::continuation;
use super::location::Location;
use super::screen::Screen;
use crate::system::auth::{Role, Session};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub screen: Screen,
    /// Location to write back (client-side redirect). At most one per call.
    pub rewrite: Option<Location>,
}

impl Resolution {
    fn stay(screen: Screen) -> Self {
        Self {
            screen,
            rewrite: None,
        }
    }

    fn redirect(screen: Screen, to: Location) -> Self {
        Self {
            screen,
            rewrite: Some(to),
        }
    }
}

pub fn resolve(location: &Location, session: &Session, cart_is_empty: bool) -> Resolution {
    match (session.role(), location) {
        // Admin is confined to the back-office whatever was requested.
        (Some(Role::Admin), Location::AdminRequest) => Resolution::stay(Screen::Admin),
        (Some(Role::Admin), _) => Resolution::redirect(Screen::Admin, Location::AdminRequest),

        // Signed-in customer on the sign-in page continues as after a login.
        (Some(Role::Customer), Location::Auth) => {
            let target = continuation::after_login(Role::Customer, cart_is_empty);
            let screen = resolve(&target, session, cart_is_empty).screen;
            Resolution::redirect(screen, target)
        }
        (None, Location::Auth) => Resolution::stay(Screen::Auth),

        (None, Location::AdminRequest) => Resolution::redirect(Screen::Auth, Location::Auth),
        (Some(Role::Customer), Location::AdminRequest) => {
            Resolution::redirect(Screen::Home, Location::Home)
        }

        (None, Location::CheckoutRequest) => Resolution::redirect(Screen::Auth, Location::Auth),
        (Some(Role::Customer), Location::CheckoutRequest) => Resolution::stay(Screen::Checkout),

        (_, Location::OrderSuccess) => Resolution::stay(Screen::OrderSuccess),
        (_, Location::ProductRequest(id)) => Resolution::stay(Screen::ProductDetail(id.clone())),
        (_, Location::Home) => Resolution::stay(Screen::Home),
        (_, Location::Unknown) => Resolution::redirect(Screen::Home, Location::Home),
    }
}

/// Whether a UI link may request `target` at all.
///
/// Header and logo links of an admin are inert unless they point to the
/// back-office. The resolver still has the final word.
pub fn can_navigate(session: &Session, target: &Location) -> bool {
    !session.is_admin() || *target == Location::AdminRequest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::User;

    fn anonymous() -> Session {
        Session::anonymous()
    }

    fn customer() -> Session {
        Session::signed_in(User::from_email("cliente@exemplo.com"))
    }

    fn admin() -> Session {
        Session::signed_in(User::from_email("admin@lumina.com"))
    }

    fn sample_locations() -> Vec<Location> {
        [
            "", "#", "#home", "#auth", "#admin", "#admin-login", "#checkout",
            "#order-success", "#product/42", "#product/", "#nope", "#CHECKOUT",
            "garbage",
        ]
        .iter()
        .map(|raw| Location::parse(raw))
        .collect()
    }

    fn all_sessions() -> Vec<Session> {
        vec![anonymous(), customer(), admin()]
    }

    #[test]
    fn test_unknown_resolves_home_with_normalizing_rewrite() {
        for session in all_sessions().into_iter().filter(|s| !s.is_admin()) {
            for cart_is_empty in [true, false] {
                let r = resolve(&Location::parse("#whatever"), &session, cart_is_empty);
                assert_eq!(r.screen, Screen::Home);
                assert_eq!(r.rewrite, Some(Location::Home));
                assert_eq!(r.rewrite.unwrap().fragment(), "");
            }
        }
    }

    #[test]
    fn test_home_has_no_rewrite() {
        let r = resolve(&Location::Home, &customer(), false);
        assert_eq!(r, Resolution::stay(Screen::Home));
    }

    #[test]
    fn test_admin_is_sticky() {
        for location in sample_locations() {
            for cart_is_empty in [true, false] {
                let r = resolve(&location, &admin(), cart_is_empty);
                assert_eq!(r.screen, Screen::Admin, "location {:?}", location);
                if location == Location::AdminRequest {
                    assert_eq!(r.rewrite, None);
                } else {
                    assert_eq!(r.rewrite, Some(Location::AdminRequest));
                }
            }
        }
    }

    #[test]
    fn test_admin_login_fragment_keeps_admin_in_place() {
        let r = resolve(&Location::parse("#admin-login"), &admin(), true);
        assert_eq!(r, Resolution::stay(Screen::Admin));
    }

    #[test]
    fn test_checkout_requires_session() {
        for cart_is_empty in [true, false] {
            let r = resolve(&Location::CheckoutRequest, &anonymous(), cart_is_empty);
            assert_eq!(r.screen, Screen::Auth);
            assert_eq!(r.rewrite, Some(Location::Auth));
        }
        let r = resolve(&Location::CheckoutRequest, &customer(), false);
        assert_eq!(r, Resolution::stay(Screen::Checkout));
    }

    #[test]
    fn test_checkout_never_reached_anonymously() {
        for location in sample_locations() {
            for cart_is_empty in [true, false] {
                let r = resolve(&location, &anonymous(), cart_is_empty);
                assert_ne!(r.screen, Screen::Checkout);
            }
        }
    }

    #[test]
    fn test_customer_on_auth_continues_to_checkout_with_items() {
        let r = resolve(&Location::Auth, &customer(), false);
        assert_eq!(r.screen, Screen::Checkout);
        assert_eq!(r.rewrite, Some(Location::CheckoutRequest));

        let again = resolve(&r.rewrite.unwrap(), &customer(), false);
        assert_eq!(again, Resolution::stay(Screen::Checkout));
    }

    #[test]
    fn test_customer_on_auth_continues_home_with_empty_cart() {
        let r = resolve(&Location::Auth, &customer(), true);
        assert_eq!(r.screen, Screen::Home);
        assert_eq!(r.rewrite, Some(Location::Home));

        let again = resolve(&r.rewrite.unwrap(), &customer(), true);
        assert_eq!(again, Resolution::stay(Screen::Home));
    }

    #[test]
    fn test_anonymous_on_auth_stays() {
        assert_eq!(
            resolve(&Location::Auth, &anonymous(), false),
            Resolution::stay(Screen::Auth)
        );
    }

    #[test]
    fn test_admin_request_by_non_admins() {
        assert_eq!(
            resolve(&Location::AdminRequest, &anonymous(), true),
            Resolution::redirect(Screen::Auth, Location::Auth)
        );
        assert_eq!(
            resolve(&Location::AdminRequest, &customer(), true),
            Resolution::redirect(Screen::Home, Location::Home)
        );
    }

    #[test]
    fn test_product_detail_for_any_non_admin_state() {
        for session in [anonymous(), customer()] {
            for cart_is_empty in [true, false] {
                let r = resolve(&Location::product("42"), &session, cart_is_empty);
                assert_eq!(r.screen, Screen::ProductDetail("42".to_string()));
                assert_eq!(r.screen.product_id(), Some("42"));
                assert_eq!(r.rewrite, None);
            }
        }
    }

    #[test]
    fn test_order_success_is_open() {
        for session in [anonymous(), customer()] {
            assert_eq!(
                resolve(&Location::OrderSuccess, &session, true),
                Resolution::stay(Screen::OrderSuccess)
            );
        }
    }

    #[test]
    fn test_rewrite_resolves_without_further_rewrite() {
        for session in all_sessions() {
            for location in sample_locations() {
                for cart_is_empty in [true, false] {
                    let first = resolve(&location, &session, cart_is_empty);
                    if let Some(rewrite) = first.rewrite {
                        let second = resolve(&rewrite, &session, cart_is_empty);
                        assert_eq!(second.rewrite, None, "{:?} via {:?}", location, rewrite);
                        assert_eq!(second.screen, first.screen);
                    }
                }
            }
        }
    }

    #[test]
    fn test_can_navigate() {
        assert!(can_navigate(&anonymous(), &Location::CheckoutRequest));
        assert!(can_navigate(&customer(), &Location::Home));
        assert!(can_navigate(&admin(), &Location::AdminRequest));
        assert!(!can_navigate(&admin(), &Location::Home));
        assert!(!can_navigate(&admin(), &Location::Auth));
    }
}
