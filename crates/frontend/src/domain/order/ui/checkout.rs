use contracts::shared::shipping::{self, ShippingQuote};
use contracts::state::Action;
use contracts::system::router::Location;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::navigation::use_router;
use crate::shared::format::format_brl;
use crate::system::auth::context::use_store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CheckoutStep {
    Review,
    Payment,
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let store = use_store();
    let router = use_router();
    let config = store.config().shipping;

    let step = RwSignal::new(CheckoutStep::Review);
    let cep = RwSignal::new(String::new());
    let quote = RwSignal::new(None::<ShippingQuote>);
    let quoting = RwSignal::new(false);
    let processing = RwSignal::new(false);

    let quote_delay = config.quote_delay_ms;
    let payment_delay = config.payment_delay_ms;
    let config = StoredValue::new(config);

    let on_cep_input = move |ev: leptos::ev::Event| {
        let masked = shipping::mask_cep(&event_target_value(&ev));
        cep.set(masked.clone());
        quote.set(None);

        if shipping::cep_digits(&masked).len() != shipping::CEP_LEN {
            quoting.set(false);
            return;
        }
        quoting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(quote_delay).await;
            // a newer keystroke supersedes this quote
            if cep.get_untracked() != masked {
                return;
            }
            match config.with_value(|c| shipping::quote(&masked, c)) {
                Ok(q) => {
                    log::debug!("shipping quote for {}: {:.2}", q.cep, q.cost);
                    quote.set(Some(q));
                }
                Err(e) => log::warn!("shipping quote rejected: {}", e),
            }
            quoting.set(false);
        });
    };

    let on_pay = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        processing.set(true);
        spawn_local(async move {
            TimeoutFuture::new(payment_delay).await;
            processing.set(false);
            router.go(Location::OrderSuccess);
        });
    };

    let cart_total = move || store.cart_total();
    let final_total = move || quote.with(|q| shipping::order_total(cart_total(), q.as_ref()));
    let can_confirm = move || quote.with(Option::is_some) && !quoting.get() && cart_total() > 0.0;

    view! {
        <Show
            when=move || !(store.cart_is_empty() && step.get() == CheckoutStep::Review)
            fallback=move || view! {
                <div class="page page--centered">
                    <h2>"Sua sacola está vazia"</h2>
                    <p class="muted">"Adicione alguns itens para continuar o checkout."</p>
                    <button class="button button--primary" on:click=move |_| router.request(Location::Home)>
                        "Voltar para a Loja"
                    </button>
                </div>
            }
        >
            <div class="page page--checkout">
                <div class="steps">
                    <div class=move || if step.get() == CheckoutStep::Review { "step step--active" } else { "step" }>
                        <span class="step__index">"1"</span>
                        <span>"Revisão"</span>
                    </div>
                    <div class="steps__line"></div>
                    <div class=move || if step.get() == CheckoutStep::Payment { "step step--active" } else { "step" }>
                        <span class="step__index">"2"</span>
                        <span>"Pagamento"</span>
                    </div>
                </div>

                <div class="checkout">
                    <div class="checkout__main">
                        <Show
                            when=move || step.get() == CheckoutStep::Review
                            fallback=move || view! {
                                <PaymentForm processing=processing final_total=Signal::derive(final_total) on_back=move || step.set(CheckoutStep::Review) on_pay=on_pay />
                            }
                        >
                            <div class="card">
                                <h3>"Itens na Sacola"</h3>
                                <ReviewLines />

                                <div class="shipping">
                                    <h3>"Opções de Entrega"</h3>
                                    <label class="caption">"Calcular Frete (CEP)"</label>
                                    <div class="shipping__input">
                                        <input
                                            type="text"
                                            placeholder="00000-000"
                                            prop:value=move || cep.get()
                                            on:input=on_cep_input
                                        />
                                        <Show when=move || quoting.get()>
                                            <span class="spinner"></span>
                                        </Show>
                                    </div>
                                    {move || quote.get().map(|q| view! {
                                        <div class="shipping__result">
                                            <p class="caption">"Frete Calculado"</p>
                                            <p>{format!("{}: {} dias úteis", format_brl(q.cost), q.delivery_days)}</p>
                                        </div>
                                    })}
                                </div>
                            </div>
                        </Show>
                    </div>

                    <aside class="checkout__summary">
                        <h3>"Resumo da Compra"</h3>
                        <div class="summary-row">
                            <span>"Subtotal"</span>
                            <span>{move || format_brl(cart_total())}</span>
                        </div>
                        <div class="summary-row">
                            <span>"Frete"</span>
                            {move || match quote.get() {
                                Some(q) => view! { <span>{format_brl(q.cost)}</span> }.into_any(),
                                None => view! { <span class="pending">"Pendente"</span> }.into_any(),
                            }}
                        </div>
                        <div class="summary-row summary-row--total">
                            <span>"Total Final"</span>
                            <span>{move || format_brl(final_total())}</span>
                        </div>

                        <Show
                            when=move || step.get() == CheckoutStep::Review
                            fallback=|| view! {
                                <div class="summary-status">
                                    <p class="caption">"Status do Pedido"</p>
                                    <p>"Aguardando Pagamento"</p>
                                </div>
                            }
                        >
                            <button
                                class="button button--primary button--block"
                                disabled=move || !can_confirm()
                                on:click=move |_| step.set(CheckoutStep::Payment)
                            >
                                {move || if cart_total() == 0.0 { "Adicione itens" } else { "Confirmar Compra" }}
                            </button>
                        </Show>
                        <p class="caption">"Pagamento 100% Criptografado"</p>
                    </aside>
                </div>

                <button class="button button--ghost" on:click=move |_| router.request(Location::Home)>
                    "← Continuar Comprando"
                </button>
            </div>
        </Show>
    }
}

#[component]
fn ReviewLines() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="review-lines">
            <For
                each=move || store.state.with(|s| s.cart.items().to_vec())
                key=|item| (item.product.id.clone(), item.quantity)
                children=move |item| {
                    let quantity = item.quantity;
                    let id_remove = item.product.id.clone();
                    let id_dec = item.product.id.clone();
                    let id_inc = item.product.id.clone();
                    view! {
                        <div class="review-line">
                            <img src=item.product.image.clone() alt=item.product.name.clone() />
                            <div class="review-line__body">
                                <div class="review-line__title">
                                    <h4>{item.product.name.clone()}</h4>
                                    <button class="link-danger" on:click=move |_| {
                                        let _ = store.dispatch(Action::RemoveFromCart(id_remove.clone()));
                                    }>"Remover"</button>
                                </div>
                                <p class="muted">{item.product.category.clone()}</p>
                                <div class="review-line__footer">
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
                                    <span class="review-line__subtotal">{format_brl(item.subtotal())}</span>
                                </div>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn PaymentForm<B, P>(
    processing: RwSignal<bool>,
    final_total: Signal<f64>,
    on_back: B,
    on_pay: P,
) -> impl IntoView
where
    B: Fn() + Copy + Send + Sync + 'static,
    P: Fn(leptos::ev::SubmitEvent) + Copy + Send + Sync + 'static,
{
    view! {
        <div class="card">
            <div class="card__header">
                <h3>"Pagamento Seguro"</h3>
                <button class="link" on:click=move |_| on_back()>"← Editar Pedido"</button>
            </div>
            <form class="payment-form" on:submit=on_pay>
                <label class="caption">"E-mail para Recibo"</label>
                <input type="email" required placeholder="seu@email.com" />

                <label class="caption">"Dados do Cartão"</label>
                <input type="text" required placeholder="Número do Cartão" />
                <div class="payment-form__row">
                    <input type="text" required placeholder="Validade MM/AA" />
                    <input type="text" required placeholder="CVC" />
                </div>

                <label class="caption">"País / Região"</label>
                <select>
                    <option>"Brasil"</option>
                    <option>"Portugal"</option>
                    <option>"Estados Unidos"</option>
                </select>

                <button type="submit" class="button button--primary button--block" disabled=move || processing.get()>
                    {move || if processing.get() {
                        "Processando...".to_string()
                    } else {
                        format!("Pagar Agora {}", format_brl(final_total.get()))
                    }}
                </button>
            </form>
        </div>
    }
}
