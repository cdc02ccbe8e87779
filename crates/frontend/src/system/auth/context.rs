use contracts::domain::catalog::CatalogError;
use contracts::shared::config::{load_config, StoreConfig};
use contracts::shared::notification::NotificationKind;
use contracts::state::{Action, AppState};
use contracts::system::auth::User;
use contracts::system::router::{after_login, after_logout};
use leptos::prelude::*;

use super::storage;
use crate::layout::toasts::ToastService;
use crate::routes::navigation::RouterContext;

/// Application store: the single [`AppState`] plus the loaded configuration.
///
/// Components read `state` reactively; every mutation goes through
/// [`AppStore::dispatch`].
#[derive(Clone, Copy)]
pub struct AppStore {
    pub state: RwSignal<AppState>,
    config: StoredValue<StoreConfig>,
}

impl AppStore {
    pub fn new(config: StoreConfig) -> Self {
        let user = storage::load_user(&config.storage);
        let cart = storage::load_cart(&config.storage);
        Self {
            state: RwSignal::new(AppState::restored(user, cart)),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config.get_value()
    }

    pub fn dispatch(&self, action: Action) -> Result<(), CatalogError> {
        self.state
            .try_update(|state| state.apply(action))
            .unwrap_or(Ok(()))
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(|s| s.session.is_admin())
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.session.user.clone())
    }

    pub fn cart_is_empty(&self) -> bool {
        self.state.with(|s| s.cart.is_empty())
    }

    pub fn item_count(&self) -> u32 {
        self.state.with(|s| s.cart.item_count())
    }

    pub fn cart_total(&self) -> f64 {
        self.state.with(|s| s.cart.total())
    }
}

/// Store provider component
#[component]
pub fn StoreProvider(children: Children) -> impl IntoView {
    let config = load_config(None).unwrap_or_else(|e| {
        log::error!("store config rejected, using built-in defaults: {}", e);
        StoreConfig::default()
    });
    let store = AppStore::new(config);

    // Persist cart and user whenever they change
    let cart = Memo::new(move |_| store.state.with(|s| s.cart.clone()));
    let user = Memo::new(move |_| store.state.with(|s| s.session.user.clone()));
    Effect::new(move |_| {
        let keys = store.config.with_value(|c| c.storage.clone());
        cart.with(|cart| storage::save_cart(&keys, cart));
        user.with(|user| storage::save_user(&keys, user.as_ref()));
    });

    provide_context(store);

    children()
}

/// Hook to access the store
pub fn use_store() -> AppStore {
    use_context::<AppStore>().expect("StoreProvider not found in component tree")
}

/// Helper: sign the principal in and continue to wherever the role belongs.
pub fn sign_in(store: AppStore, router: RouterContext, toasts: ToastService, user: User) {
    let role = user.role;
    let name = user.name.clone();
    store.state.update(|s| s.sign_in(user));
    toasts.push(NotificationKind::Success, format!("Bem-vindo, {}!", name));

    let next = after_login(role, store.state.with_untracked(|s| s.cart_is_empty()));
    router.go(next);
}

/// Helper: sign out, reset filters and go back to the storefront.
pub fn sign_out(store: AppStore, router: RouterContext, toasts: ToastService) {
    store.state.update(|s| s.sign_out());
    toasts.push(NotificationKind::Info, "Sessão encerrada.");
    router.go(after_logout());
}
