use contracts::domain::catalog::seed::ALL_CATEGORIES;
use contracts::state::Action;
use leptos::prelude::*;

use crate::shared::components::hero::Hero;
use crate::shared::components::product_card::ProductCard;
use crate::shared::dom::PRODUCTS_SECTION_ID;
use crate::system::auth::context::use_store;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_store();

    let query = move || store.state.with(|s| s.filter.query.clone());
    let searching = move || store.state.with(|s| s.filter.is_searching());
    let products = move || {
        store
            .state
            .with(|s| s.visible_products().into_iter().cloned().collect::<Vec<_>>())
    };
    let categories = move || store.state.with(|s| s.catalog.categories.clone());
    let is_active = move |category: &str| {
        store
            .state
            .with(|s| s.filter.category == category && !s.filter.is_searching())
    };

    let show_all = move |_| {
        let _ = store.dispatch(Action::SelectCategory(ALL_CATEGORIES.to_string()));
    };

    view! {
        <div class="page page--home">
            <Hero />

            <div id=PRODUCTS_SECTION_ID class="section-header">
                <div>
                    <div class="section-header__kicker">
                        {move || if searching() { "Resultados da busca" } else { "Tendências do Momento" }}
                    </div>
                    <h2>
                        {move || if searching() { format!("\"{}\"", query()) } else { "Curadoria para Você".to_string() }}
                    </h2>
                </div>

                <div class="category-tabs">
                    <For
                        each=categories
                        key=|category| category.clone()
                        children=move |category| {
                            let active = category.clone();
                            let label = category.clone();
                            view! {
                                <button
                                    class=move || if is_active(&active) { "category-tab category-tab--active" } else { "category-tab" }
                                    on:click=move |_| {
                                        let _ = store.dispatch(Action::SelectCategory(category.clone()));
                                    }
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                </div>
            </div>

            <Show
                when=move || store.state.with(|s| !s.visible_products().is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <h3>"Nenhum item encontrado"</h3>
                        <p>
                            {move || format!(
                                "Não encontramos nada para \"{}\" nesta categoria. Tente outros termos ou navegue nas coleções.",
                                query()
                            )}
                        </p>
                        <button class="button button--dark" on:click=show_all>
                            "Ver todos os produtos"
                        </button>
                    </div>
                }
            >
                <div class="product-grid">
                    <For
                        each=products
                        key=|product| (product.id.clone(), product.name.clone(), product.price.to_bits(), product.stock)
                        children=|product| view! { <ProductCard product=product /> }
                    />
                </div>
            </Show>

            <div class="newsletter">
                <h2>"Ganhe 15% OFF na sua Primeira Escolha Premium"</h2>
                <p>
                    "Faça parte do Coletivo Lumina e tenha acesso antecipado a drops exclusivos e dicas de moda sustentável."
                </p>
                <div class="newsletter__form">
                    <input type="email" placeholder="Seu melhor e-mail" />
                    <button class="button button--light">"Inscrever Agora"</button>
                </div>
            </div>
        </div>
    }
}
