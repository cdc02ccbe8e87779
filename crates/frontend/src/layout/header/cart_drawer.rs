use contracts::state::Action;
use contracts::system::router::Location;
use leptos::prelude::*;

use crate::routes::navigation::use_router;
use crate::shared::format::format_brl;
use crate::system::auth::context::use_store;

/// Shopping bag dropdown opened from the header.
#[component]
pub fn CartDrawer(open: RwSignal<bool>) -> impl IntoView {
    let store = use_store();
    let router = use_router();

    let lines = move || store.state.with(|s| s.cart.items().to_vec());

    let on_checkout = move |_| {
        open.set(false);
        // anonymous sessions are sent to sign-in and continue here afterwards
        router.go(Location::CheckoutRequest);
    };

    view! {
        <div class="cart-drawer">
            <div class="cart-drawer__header">
                <h3>{move || format!("Sua Sacola ({})", store.item_count())}</h3>
                <button class="icon-btn" on:click=move |_| open.set(false)>"×"</button>
            </div>

            <div class="cart-drawer__body">
                <Show
                    when=move || !store.cart_is_empty()
                    fallback=|| view! {
                        <div class="cart-drawer__empty">
                            <p>"Sua sacola está vazia"</p>
                        </div>
                    }
                >
                    <For
                        each=lines
                        key=|item| (item.product.id.clone(), item.quantity)
                        children=move |item| {
                            let id = item.product.id.clone();
                            let id_dec = id.clone();
                            let id_inc = id.clone();
                            let quantity = item.quantity;
                            view! {
                                <div class="cart-line">
                                    <img class="cart-line__image" src=item.product.image.clone() alt=item.product.name.clone() />
                                    <div class="cart-line__info">
                                        <h4>{item.product.name.clone()}</h4>
                                        <p class="muted">{format_brl(item.product.price)}</p>
                                        <div class="cart-line__controls">
                                            <div class="stepper">
                                                <button on:click=move |_| {
                                                    let _ = store.dispatch(Action::UpdateCartQuantity {
                                                        product_id: id_dec.clone(),
                                                        quantity: quantity.saturating_sub(1),
                                                    });
                                                }>"−"</button>
                                                <span>{quantity}</span>
                                                <button on:click=move |_| {
                                                    let _ = store.dispatch(Action::UpdateCartQuantity {
                                                        product_id: id_inc.clone(),
                                                        quantity: quantity + 1,
                                                    });
                                                }>"+"</button>
                                            </div>
                                            <button
                                                class="link-danger"
                                                on:click=move |_| {
                                                    let _ = store.dispatch(Action::RemoveFromCart(id.clone()));
                                                }
                                            >
                                                "Remover"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>

            <Show when=move || !store.cart_is_empty()>
                <div class="cart-drawer__footer">
                    <div class="cart-drawer__total">
                        <span>"Subtotal"</span>
                        <strong>{move || format_brl(store.cart_total())}</strong>
                    </div>
                    <button class="button button--primary button--block" on:click=on_checkout>
                        "Finalizar Compra"
                    </button>
                </div>
            </Show>
        </div>
    }
}
