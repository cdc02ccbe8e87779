use contracts::domain::catalog::Product;
use contracts::state::Action;
use contracts::system::router::Location;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::layout::toasts::use_toasts;
use crate::routes::navigation::use_router;
use crate::shared::format::format_brl;
use crate::system::auth::context::use_store;

/// Light swatches get a dark selection dot.
fn is_light_swatch(hex: &str) -> bool {
    matches!(hex.to_ascii_uppercase().as_str(), "#FFFFFF" | "#F5F5DC")
}

#[component]
pub fn ProductDetailPage(product_id: String) -> impl IntoView {
    let store = use_store();
    let router = use_router();

    let lookup_id = product_id.clone();
    let product = Memo::new(move |_| store.state.with(|s| s.catalog.find(&lookup_id).cloned()));

    view! {
        {move || match product.get() {
            Some(product) => view! { <ProductDetail product=product /> }.into_any(),
            None => view! {
                <div class="page page--centered">
                    <h2>"Produto não encontrado"</h2>
                    <p class="muted">{format!("Não há nenhum produto com o código \"{}\".", product_id)}</p>
                    <button class="button button--primary" on:click=move |_| router.request(Location::Home)>
                        "Voltar para a Loja"
                    </button>
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let store = use_store();
    let router = use_router();
    let toasts = use_toasts();

    let selected_image = RwSignal::new(product.image.clone());
    let selected_size = RwSignal::new(product.sizes.first().cloned().unwrap_or_default());
    let selected_color = RwSignal::new(
        product
            .colors
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_default(),
    );
    let added = RwSignal::new(false);

    let to_cart = product.clone();
    let on_add = move |_| {
        let _ = store.dispatch(Action::AddToCart(to_cart.clone()));
        toasts.success(format!("{} adicionado à sacola", to_cart.name));
        added.set(true);
        Timeout::new(2_000, move || added.set(false)).forget();
    };

    let gallery = product.gallery();
    let colors = product.colors.clone();
    let sizes = product.sizes.clone();
    let name = product.name.clone();

    view! {
        <div class="page page--product">
            <div class="breadcrumbs">
                <button on:click=move |_| router.request(Location::Home)>"Início"</button>
                <span>"›"</span>
                <span class="muted">{product.category.clone()}</span>
                <span>"›"</span>
                <span class="breadcrumbs__current">{product.name.clone()}</span>
            </div>

            <div class="product-detail">
                <div class="product-detail__gallery">
                    <div class="product-detail__main-image">
                        <img src=move || selected_image.get() alt=product.name.clone() />
                    </div>
                    <div class="product-detail__thumbs">
                        {gallery
                            .into_iter()
                            .enumerate()
                            .map(|(idx, image)| {
                                let current = image.clone();
                                let alt = format!("{} visão {}", name, idx);
                                let click_image = image.clone();
                                view! {
                                    <button
                                        class=move || if selected_image.get() == current { "thumb thumb--active" } else { "thumb" }
                                        on:click=move |_| selected_image.set(click_image.clone())
                                    >
                                        <img src=image alt=alt />
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="product-detail__info">
                    <div class="product-detail__kicker">{format!("Coleção {}", product.category)}</div>
                    <h1>{product.name.clone()}</h1>
                    <div class="product-detail__price-row">
                        <span class="product-detail__price">{format_brl(product.price)}</span>
                        <span class="rating">{format!("★ {}", product.rating)}</span>
                    </div>
                    <p class="product-detail__description">{product.description.clone()}</p>

                    {(!colors.is_empty()).then(|| view! {
                        <div class="option-group">
                            <label>"Cor: " <span>{move || selected_color.get()}</span></label>
                            <div class="swatches">
                                {colors
                                    .into_iter()
                                    .map(|color| {
                                        let current = color.name.clone();
                                        let chosen = color.name.clone();
                                        let dot = if is_light_swatch(&color.hex) { "swatch__dot swatch__dot--dark" } else { "swatch__dot" };
                                        let selected = move || selected_color.get() == current;
                                        let class_selected = selected.clone();
                                        view! {
                                            <button
                                                class=move || if class_selected() { "swatch swatch--active" } else { "swatch" }
                                                style=format!("background-color: {}", color.hex)
                                                title=color.name.clone()
                                                on:click=move |_| selected_color.set(chosen.clone())
                                            >
                                                <Show when=selected>
                                                    <div class=dot></div>
                                                </Show>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    })}

                    {(!sizes.is_empty()).then(|| view! {
                        <div class="option-group">
                            <label>"Selecionar Tamanho"</label>
                            <div class="sizes">
                                {sizes
                                    .into_iter()
                                    .map(|size| {
                                        let current = size.clone();
                                        let chosen = size.clone();
                                        view! {
                                            <button
                                                class=move || if selected_size.get() == current { "size size--active" } else { "size" }
                                                on:click=move |_| selected_size.set(chosen.clone())
                                            >
                                                {size}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    })}

                    <button
                        class=move || if added.get() { "button button--success button--large" } else { "button button--primary button--large" }
                        disabled=move || added.get()
                        on:click=on_add
                    >
                        {move || if added.get() { "✓ Adicionado" } else { "Adicionar à Sacola" }}
                    </button>

                    <div class="product-detail__meta">
                        <div>
                            <p class="caption">"Disponibilidade"</p>
                            <p class="in-stock">{format!("Em estoque ({} unidades)", product.stock)}</p>
                        </div>
                        <div>
                            <p class="caption">"Entrega"</p>
                            <p>"Frete Grátis Express"</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_swatches() {
        assert!(is_light_swatch("#ffffff"));
        assert!(is_light_swatch("#F5F5DC"));
        assert!(!is_light_swatch("#000000"));
    }
}
