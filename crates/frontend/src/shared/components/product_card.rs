use contracts::domain::catalog::Product;
use contracts::state::Action;
use contracts::system::router::Location;
use leptos::prelude::*;

use crate::layout::toasts::use_toasts;
use crate::routes::navigation::use_router;
use crate::shared::format::format_brl;
use crate::system::auth::context::use_store;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = use_store();
    let router = use_router();
    let toasts = use_toasts();
    let low_stock = product.is_low_stock(store.config().ui.low_stock_threshold);

    let id = product.id.clone();
    let to_cart = product.clone();

    view! {
        <div class="product-card" on:click=move |_| router.request(Location::product(id.clone()))>
            <div class="product-card__media">
                <img src=product.image.clone() alt=product.name.clone() />
                <button
                    class="button button--primary product-card__add"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let name = to_cart.name.clone();
                        let _ = store.dispatch(Action::AddToCart(to_cart.clone()));
                        toasts.success(format!("{} adicionado à sacola", name));
                    }
                >
                    "Add à Sacola"
                </button>
            </div>

            <div class="product-card__info">
                <div class="product-card__meta">
                    <span class="product-card__category">{product.category.clone()}</span>
                    <span class="product-card__rating">{format!("★ {}", product.rating)}</span>
                </div>
                <h3>{product.name.clone()}</h3>
                <p class="product-card__description">{product.description.clone()}</p>
                <div class="product-card__footer">
                    <span class="product-card__price">{format_brl(product.price)}</span>
                    {low_stock.then(|| view! {
                        <span class="product-card__stock">{format!("Restam apenas {}!", product.stock)}</span>
                    })}
                </div>
            </div>
        </div>
    }
}
