use contracts::system::router::Screen;
use leptos::prelude::*;

use super::navigation::RouterContext;
use crate::dashboards::admin::ui::dashboard::AdminDashboard;
use crate::domain::catalog::ui::details::ProductDetailPage;
use crate::domain::catalog::ui::home::HomePage;
use crate::domain::order::ui::checkout::CheckoutPage;
use crate::domain::order::ui::success::OrderSuccessPage;
use crate::layout::Shell;
use crate::routes::navigation::use_router;
use crate::system::auth::context::use_store;
use crate::system::pages::login::AuthPage;

/// Binds the navigator to the browser: resolves the initial hash, follows
/// `hashchange` and re-resolves whenever the signed-in role changes.
#[component]
pub fn RouterProvider(children: Children) -> impl IntoView {
    let store = use_store();
    let router = RouterContext::new(store);
    provide_context(router);

    router.handle_location_change();

    let listener = window_event_listener(leptos::ev::hashchange, move |_| {
        router.handle_location_change();
    });
    on_cleanup(move || listener.remove());

    Effect::new(move |previous: Option<Option<contracts::system::auth::Role>>| {
        let role = store.state.with(|s| s.session.role());
        if previous.is_some_and(|prev| prev != role) {
            router.handle_session_change();
        }
        role
    });

    children()
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let router = use_router();

    view! {
        <Shell>
            {move || match router.screen() {
                Screen::Home => view! { <HomePage /> }.into_any(),
                Screen::Auth => view! { <AuthPage /> }.into_any(),
                Screen::Admin => view! { <AdminDashboard /> }.into_any(),
                Screen::Checkout => view! { <CheckoutPage /> }.into_any(),
                Screen::OrderSuccess => view! { <OrderSuccessPage /> }.into_any(),
                Screen::ProductDetail(id) => view! { <ProductDetailPage product_id=id /> }.into_any(),
            }}
        </Shell>
    }
}
