use contracts::domain::catalog::seed::ALL_CATEGORIES;
use contracts::state::Action;
use contracts::system::router::{Location, Screen};
use leptos::prelude::*;

use super::cart_drawer::CartDrawer;
use crate::layout::toasts::use_toasts;
use crate::routes::navigation::use_router;
use crate::shared::dom::{scroll_to_products, scroll_to_top};
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::{sign_out, use_store};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_store();
    let router = use_router();
    let toasts = use_toasts();
    let store_name = store.config().store.name;

    let menu_open = RwSignal::new(false);
    let search_open = RwSignal::new(false);
    let cart_open = RwSignal::new(false);

    let is_admin = move || store.is_admin();
    let user_name = move || store.user().map(|u| u.name);

    // filters act on the home grid
    let show_storefront = move || {
        if router.outcome.with_untracked(|o| o.screen != Screen::Home) {
            router.request(Location::Home);
        }
    };

    let on_logo = move |_| {
        if store.is_admin() {
            return;
        }
        let _ = store.dispatch(Action::SelectCategory(ALL_CATEGORIES.to_string()));
        router.request(Location::Home);
        scroll_to_top();
    };

    let on_category = move |category: String| {
        let _ = store.dispatch(Action::SelectCategory(category));
        show_storefront();
        menu_open.set(false);
        scroll_to_products();
    };

    let toggle_search = move |_| {
        let opening = !search_open.get_untracked();
        search_open.set(opening);
        if opening {
            show_storefront();
            scroll_to_products();
        } else {
            let _ = store.dispatch(Action::SetSearchQuery(String::new()));
        }
    };

    let on_search_input = move |ev: leptos::ev::Event| {
        let _ = store.dispatch(Action::SetSearchQuery(event_target_value(&ev)));
        if !store.is_admin() {
            show_storefront();
            scroll_to_products();
        }
    };

    let categories = move || {
        store.state.with(|s| {
            s.catalog
                .navigable_categories()
                .cloned()
                .collect::<Vec<_>>()
        })
    };
    let is_active_category = move |category: &str| {
        store
            .state
            .with(|s| s.filter.category == category && !s.filter.is_searching())
    };

    view! {
        <header data-zone="header" class=move || if is_admin() { "header header--admin" } else { "header" }>
            <div class="header__content">
                <Show when=move || !is_admin()>
                    <button class="icon-btn header__burger" on:click=move |_| menu_open.update(|v| *v = !*v)>
                        {move || if menu_open.get() { "×" } else { "☰" }}
                    </button>
                </Show>

                <div class="header__brand">
                    <span
                        class=move || if is_admin() { "header__title" } else { "header__title header__title--link" }
                        on:click=on_logo
                    >
                        {store_name}
                    </span>
                    <Show when=is_admin>
                        <span class="badge badge--dark">"PAINEL"</span>
                    </Show>

                    <Show when=move || !is_admin()>
                        <div class=move || if search_open.get() { "header__search header__search--open" } else { "header__search" }>
                            <button class="icon-btn" on:click=toggle_search>
                                {move || if search_open.get() { "×" } else { "⌕" }}
                            </button>
                            <Show when=move || search_open.get()>
                                <input
                                    type="text"
                                    placeholder="Buscar..."
                                    prop:value=move || store.state.with(|s| s.filter.query.clone())
                                    on:input=on_search_input
                                />
                            </Show>
                        </div>
                    </Show>
                </div>

                <Show when=move || !is_admin()>
                    <nav class=move || if menu_open.get() { "header__nav header__nav--open" } else { "header__nav" }>
                        <For
                            each=categories
                            key=|category| category.clone()
                            children=move |category| {
                                let label = category.clone();
                                let active = category.clone();
                                view! {
                                    <button
                                        class=move || if is_active_category(&active) { "nav-link nav-link--active" } else { "nav-link" }
                                        on:click=move |_| on_category(category.clone())
                                    >
                                        {label}
                                    </button>
                                }
                            }
                        />
                    </nav>
                </Show>
            </div>

            <div class="header__actions">
                <ThemeToggle />

                <div class="user-menu">
                    <button
                        class="icon-btn"
                        on:click=move |_| {
                            if store.user().is_none() {
                                router.request(Location::Auth);
                            }
                        }
                    >
                        "👤"
                        {move || user_name().map(|name| view! { <span class="user-menu__name">{name}</span> })}
                    </button>
                    <Show when=move || store.user().is_some()>
                        <div class="user-menu__dropdown">
                            <Show when=is_admin>
                                <p class="user-menu__caption">"Gestor Logado"</p>
                                <button class="user-menu__item" on:click=move |_| router.go(Location::AdminRequest)>
                                    "Painel"
                                </button>
                            </Show>
                            <button
                                class="user-menu__item user-menu__item--danger"
                                on:click=move |_| sign_out(store, router, toasts)
                            >
                                "Encerrar Sessão"
                            </button>
                        </div>
                    </Show>
                </div>

                <Show when=move || !is_admin()>
                    <div class="cart-button">
                        <button class="icon-btn" on:click=move |_| cart_open.update(|v| *v = !*v)>
                            "🛍"
                            <Show when=move || { store.item_count() > 0 }>
                                <span class="cart-button__count">{move || store.item_count()}</span>
                            </Show>
                        </button>
                        <Show when=move || cart_open.get()>
                            <CartDrawer open=cart_open />
                        </Show>
                    </div>
                </Show>
            </div>
        </header>
    }
}
