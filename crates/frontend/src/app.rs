use crate::layout::toasts::ToastService;
use crate::routes::routes::{AppRoutes, RouterProvider};
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::{use_store, StoreProvider};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <StoreProvider>
            <ThemeProvider>
                <Services>
                    <RouterProvider>
                        <AppRoutes />
                    </RouterProvider>
                </Services>
            </ThemeProvider>
        </StoreProvider>
    }
}

/// App-wide services that depend on the loaded configuration.
#[component]
fn Services(children: Children) -> impl IntoView {
    let toast_ms = use_store().config().ui.toast_ms;
    provide_context(ToastService::new(toast_ms));

    children()
}
