use contracts::domain::cart::Cart;
use contracts::shared::config::StorageKeys;
use contracts::state::persist;
use contracts::system::auth::User;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Save cart lines to localStorage
pub fn save_cart(keys: &StorageKeys, cart: &Cart) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(&keys.cart, &persist::encode_cart(cart));
    }
}

/// Get cart from localStorage (empty when missing or unreadable)
pub fn load_cart(keys: &StorageKeys) -> Cart {
    persist::decode_cart(get_item(&keys.cart).as_deref())
}

/// Save signed-in user, or forget it on logout
pub fn save_user(keys: &StorageKeys, user: Option<&User>) {
    if let Some(storage) = get_local_storage() {
        match user {
            Some(user) => {
                let _ = storage.set_item(&keys.user, &persist::encode_user(user));
            }
            None => {
                let _ = storage.remove_item(&keys.user);
            }
        }
    }
}

/// Get signed-in user from localStorage
pub fn load_user(keys: &StorageKeys) -> Option<User> {
    persist::decode_user(get_item(&keys.user).as_deref())
}

pub fn load_string(key: &str) -> Option<String> {
    get_item(key)
}

pub fn save_string(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}
