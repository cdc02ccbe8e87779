//! One-shot navigation decisions fired by session changes.

use super::location::Location;
use crate::system::auth::Role;

/// Where to go right after a successful login.
pub fn after_login(role: Role, cart_is_empty: bool) -> Location {
    match role {
        Role::Admin => Location::AdminRequest,
        Role::Customer if cart_is_empty => Location::Home,
        Role::Customer => Location::CheckoutRequest,
    }
}

/// Where to go right after logout. Filter reset is done by the state reducer.
pub fn after_logout() -> Location {
    Location::Home
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_login() {
        assert_eq!(after_login(Role::Admin, true).fragment(), "admin");
        assert_eq!(after_login(Role::Admin, false).fragment(), "admin");
        assert_eq!(after_login(Role::Customer, false).fragment(), "checkout");
        assert_eq!(after_login(Role::Customer, true).fragment(), "");
    }

    #[test]
    fn test_after_logout_is_home() {
        assert_eq!(after_logout(), Location::Home);
        assert_eq!(after_logout().fragment(), "");
    }
}
