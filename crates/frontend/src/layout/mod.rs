pub mod footer;
pub mod header;
pub mod toasts;

use leptos::prelude::*;

use crate::system::auth::context::use_store;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |          Screen (from the router)        |
/// +------------------------------------------+
/// |        Footer (storefront only)          |
/// +------------------------------------------+
/// ```
///
/// The back office takes the full width.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let store = use_store();

    view! {
        <div class="app-layout">
            <header::Header />
            <toasts::Toasts />
            <main class=move || if store.is_admin() { "app-main app-main--wide" } else { "app-main" }>
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
