use leptos::prelude::*;

use crate::system::auth::context::use_store;

/// Storefront footer; the back office has none.
#[component]
pub fn Footer() -> impl IntoView {
    let store = use_store();
    let store_name = store.config().store.name;

    view! {
        <Show when=move || !store.is_admin()>
            <footer data-zone="footer" class="footer">
                <div class="footer__content">
                    <div class="footer__brand">
                        <h3>{store_name.clone()}</h3>
                        <div class="footer__accent"></div>
                    </div>
                    <a
                        class="footer__social"
                        href="https://instagram.com"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Instagram"
                    >
                        "IG"
                    </a>
                </div>
                <p class="footer__legal">"© 2024 Lumina Fashion. Todos os direitos reservados."</p>
            </footer>
        </Show>
    }
}
