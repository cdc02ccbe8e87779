use chrono::NaiveDate;
use contracts::domain::catalog::seed::ALL_CATEGORIES;
use contracts::domain::order::receipt::{format_day_month, Receipt};
use contracts::state::Action;
use contracts::system::router::Location;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::routes::navigation::use_router;
use crate::shared::dom::print_page;
use crate::shared::format::format_brl;
use crate::system::auth::context::use_store;

fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

#[component]
pub fn OrderSuccessPage() -> impl IntoView {
    let store = use_store();
    let router = use_router();
    let delivery_days = store.config().shipping.delivery_days;

    // snapshot before the cart is cleared
    let seed = (js_sys::Math::random() * 900_000.0) as u32;
    let receipt = store
        .state
        .with_untracked(|s| Receipt::capture(&s.cart, today(), seed));
    log::info!("order {} confirmed: {:.2}", receipt.number, receipt.total);

    if !receipt.items.is_empty() {
        Timeout::new(300, move || {
            let _ = store.dispatch(Action::ClearCart);
        })
        .forget();
    }

    let receipt_open = RwSignal::new(false);
    let delivery = format_day_month(receipt.delivery_estimate(delivery_days));
    let receipt = StoredValue::new(receipt);

    let continue_shopping = move |_| {
        let _ = store.dispatch(Action::SelectCategory(ALL_CATEGORIES.to_string()));
        router.request(Location::Home);
    };

    view! {
        <div class="page page--success">
            <div class="success-hero no-print">
                <div class="success-hero__icon">"✓"</div>
                <h1>"Pedido Confirmado!"</h1>
                <p class="muted">
                    "Obrigado por escolher a Lumina. Seu pagamento foi processado com sucesso e estamos preparando seu pacote com todo cuidado."
                </p>
            </div>

            <div class="success-grid no-print">
                <div class="card">
                    <h3>"Resumo Operacional"</h3>
                    <div class="summary-row">
                        <span class="muted">"Número do Pedido"</span>
                        <strong>{receipt.with_value(|r| r.number.clone())}</strong>
                    </div>
                    <div class="summary-row">
                        <span class="muted">"Data do Processamento"</span>
                        <strong>{receipt.with_value(|r| r.formatted_date())}</strong>
                    </div>
                    <div class="summary-row">
                        <span class="muted">"Valor Total"</span>
                        <strong class="accent">{receipt.with_value(|r| format_brl(r.total))}</strong>
                    </div>
                    <div class="delivery-note">
                        <p class="caption">"Previsão de Chegada"</p>
                        <p>{format!("Até {}", delivery)}</p>
                    </div>
                </div>

                <div class="card card--accent">
                    <h3>"Acompanhamento"</h3>
                    <ol class="next-steps">
                        <li>"Confirmação enviada para seu e-mail cadastrado."</li>
                        <li>"Notificaremos você via SMS assim que o rastreio for gerado."</li>
                    </ol>
                </div>
            </div>

            <div class="success-actions no-print">
                <button class="button button--primary" on:click=continue_shopping>
                    "Continuar Comprando"
                </button>
                <button class="button button--secondary" on:click=move |_| receipt_open.set(true)>
                    "Ver Recibo"
                </button>
            </div>

            <Show when=move || receipt_open.get()>
                <div class="modal-overlay" on:click=move |_| receipt_open.set(false)>
                    <div id="printable-receipt" class="modal-content receipt" on:click=|e| e.stop_propagation()>
                        <div class="receipt__header">
                            <h3>"Recibo"</h3>
                            <button class="icon-btn no-print" on:click=move |_| receipt_open.set(false)>"×"</button>
                        </div>
                        <p class="muted">
                            {receipt.with_value(|r| format!("{} · {}", r.number, r.formatted_date()))}
                        </p>
                        <table class="receipt__lines">
                            <tbody>
                                {receipt.with_value(|r| {
                                    r.items
                                        .iter()
                                        .map(|item| view! {
                                            <tr>
                                                <td>{format!("{}x {}", item.quantity, item.product.name)}</td>
                                                <td class="num">{format_brl(item.subtotal())}</td>
                                            </tr>
                                        })
                                        .collect_view()
                                })}
                            </tbody>
                        </table>
                        <div class="summary-row">
                            <span>"Subtotal"</span>
                            <span>{receipt.with_value(|r| format_brl(r.subtotal()))}</span>
                        </div>
                        <div class="summary-row">
                            <span>"Impostos (7%)"</span>
                            <span>{receipt.with_value(|r| format_brl(r.taxes()))}</span>
                        </div>
                        <div class="summary-row summary-row--total">
                            <span>"Total"</span>
                            <span>{receipt.with_value(|r| format_brl(r.total))}</span>
                        </div>
                        <div class="receipt__actions no-print">
                            <button class="button button--secondary" on:click=move |_| print_page()>
                                "Imprimir"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
