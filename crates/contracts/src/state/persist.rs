//! JSON encoding of the parts of [`super::AppState`] kept in local storage.
//!
//! Decoding is lenient: a missing or corrupt entry yields the empty value,
//! the storefront must still boot.

use crate::domain::cart::Cart;
use crate::system::auth::User;

pub fn encode_cart(cart: &Cart) -> String {
    serde_json::to_string(cart).unwrap_or_else(|_| "[]".to_string())
}

pub fn decode_cart(raw: Option<&str>) -> Cart {
    raw.and_then(|s| match serde_json::from_str(s) {
        Ok(cart) => Some(cart),
        Err(e) => {
            log::warn!("stored cart discarded: {}", e);
            None
        }
    })
    .unwrap_or_default()
}

pub fn encode_user(user: &User) -> String {
    serde_json::to_string(user).unwrap_or_default()
}

pub fn decode_user(raw: Option<&str>) -> Option<User> {
    raw.and_then(|s| serde_json::from_str(s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::seed::SEED_PRODUCTS;
    use crate::system::auth::Role;

    #[test]
    fn test_missing_or_corrupt_cart_is_empty() {
        assert!(decode_cart(None).is_empty());
        assert!(decode_cart(Some("{not json")).is_empty());
        assert!(decode_cart(Some("[]")).is_empty());
    }

    #[test]
    fn test_cart_is_stored_as_plain_list() {
        let mut cart = Cart::default();
        cart.add(SEED_PRODUCTS[0].clone());
        let raw = encode_cart(&cart);
        assert!(raw.starts_with('['));
        assert_eq!(decode_cart(Some(&raw)).item_count(), 1);
    }

    #[test]
    fn test_user_role_stored_lowercase() {
        let raw = encode_user(&User::from_email("admin@lumina.com"));
        assert!(raw.contains("\"role\":\"admin\""));
        assert_eq!(decode_user(Some(&raw)).map(|u| u.role), Some(Role::Admin));
        assert_eq!(decode_user(Some("null")), None);
    }
}
