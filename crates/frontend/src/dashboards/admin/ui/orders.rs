use contracts::domain::order::{Order, OrderStatus, SEED_ORDERS};
use leptos::prelude::*;

use crate::layout::toasts::use_toasts;
use crate::shared::dom::print_page;
use crate::shared::format::format_brl;
use crate::system::auth::context::use_store;

#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    view! {
        <span class=format!("badge {}", status.css_modifier())>{status.display_name()}</span>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OrderView {
    Details,
    Label,
}

/// Order list with a management modal.
///
/// Status changes live only as long as the tab is mounted.
#[component]
pub fn OrdersTab() -> impl IntoView {
    let toasts = use_toasts();
    let orders = RwSignal::new(SEED_ORDERS.clone());
    let selected = RwSignal::new(None::<String>);
    let view_mode = RwSignal::new(OrderView::Details);

    let selected_order = Memo::new(move |_| {
        selected.get().and_then(|id| {
            orders.with(|list| list.iter().find(|o| o.id == id).cloned())
        })
    });

    let open = move |id: String| {
        view_mode.set(OrderView::Details);
        selected.set(Some(id));
    };
    let close = move || selected.set(None);

    let set_status = move |id: String, next: OrderStatus| {
        let mut changed = false;
        orders.update(|list| {
            if let Some(order) = list.iter_mut().find(|o| o.id == id) {
                if order.status.can_transition_to(next) {
                    order.status = next;
                    changed = true;
                }
            }
        });
        if changed {
            toasts.success(format!("Pedido {} atualizado: {}", id, next.display_name()));
        }
    };

    view! {
        <div class="card card--flush">
            <table class="table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Cliente"</th>
                        <th>"Data"</th>
                        <th class="num">"Itens"</th>
                        <th class="num">"Total"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || orders.get()
                        key=|order| (order.id.clone(), order.status)
                        children=move |order| {
                            let id = order.id.clone();
                            view! {
                                <tr>
                                    <td class="mono">{order.id.clone()}</td>
                                    <td class="strong">{order.customer_name.clone()}</td>
                                    <td class="muted">{order.formatted_date()}</td>
                                    <td class="num">{order.items}</td>
                                    <td class="num">{format_brl(order.total)}</td>
                                    <td><StatusBadge status=order.status /></td>
                                    <td>
                                        <button class="icon-btn" title="Gerenciar Pedido" on:click=move |_| open(id.clone())>
                                            "👁"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>

        {move || selected_order.get().map(|order| view! {
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal-content" on:click=|e| e.stop_propagation()>
                    <div class="modal-header no-print">
                        <h3>{format!("Pedido {}", order.id)}</h3>
                        <button class="icon-btn" on:click=move |_| close()>"×"</button>
                    </div>
                    {match view_mode.get() {
                        OrderView::Details => {
                            view! { <OrderDetails order=order.clone() view_mode=view_mode set_status=set_status /> }.into_any()
                        }
                        OrderView::Label => view! { <ShippingLabel order=order.clone() view_mode=view_mode /> }.into_any(),
                    }}
                </div>
            </div>
        })}
    }
}

#[component]
fn OrderDetails<F>(order: Order, view_mode: RwSignal<OrderView>, set_status: F) -> impl IntoView
where
    F: Fn(String, OrderStatus) + Copy + Send + Sync + 'static,
{
    let status = order.status;
    let order_id = order.id.clone();
    let action = move |label: &'static str, next: OrderStatus, class: &'static str| {
        let id = order_id.clone();
        view! {
            <button
                class=format!("button button--block {}", class)
                disabled=!status.can_transition_to(next)
                on:click=move |_| set_status(id.clone(), next)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="order-details">
            <div class="order-details__info">
                <p><span class="muted">"Cliente: "</span><strong>{order.customer_name.clone()}</strong></p>
                <p><span class="muted">"Data: "</span>{order.formatted_date()}</p>
                <p><span class="muted">"Itens: "</span>{order.items}</p>
                <p><span class="muted">"Total: "</span><strong>{format_brl(order.total)}</strong></p>
                <p><span class="muted">"Status: "</span><StatusBadge status=status /></p>
            </div>
            <div class="order-details__actions">
                <h4>"Fluxo do Pedido"</h4>
                {action("Marcar como Enviado", OrderStatus::Shipped, "button--info")}
                {action("Confirmar Entrega", OrderStatus::Delivered, "button--success")}
                {action("Cancelar Pedido", OrderStatus::Cancelled, "button--danger")}
                <h4>"Documentação"</h4>
                <button class="button button--secondary button--block" on:click=move |_| view_mode.set(OrderView::Label)>
                    "Gerar Etiqueta"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ShippingLabel(order: Order, view_mode: RwSignal<OrderView>) -> impl IntoView {
    let store = use_store();
    let store_name = store.config().store.name;

    view! {
        <div id="printable-label" class="shipping-label">
            <div class="shipping-label__header">
                <h2>{store_name.to_uppercase()}</h2>
                <div>
                    <p class="caption">"ETIQUETA DE ENVIO"</p>
                    <p class="strong">{format!("# {}", order.id)}</p>
                </div>
            </div>
            <div class="shipping-label__section">
                <p class="caption">"DESTINATÁRIO"</p>
                <p class="strong">{order.customer_name.to_uppercase()}</p>
                <p>"AV. PAULISTA, 1500 - BELA VISTA"</p>
                <p>"01310-200 - SÃO PAULO - SP"</p>
            </div>
            <div class="shipping-label__section">
                <p class="caption">"REMETENTE"</p>
                <p class="strong">{format!("{} FASHION", store_name.to_uppercase())}</p>
                <p>"RUA DA MODA, 42 - JARDINS"</p>
                <p>"01414-001 - SÃO PAULO - SP"</p>
            </div>
        </div>
        <div class="modal-actions no-print">
            <button class="button button--primary" on:click=move |_| print_page()>"Imprimir Etiqueta"</button>
            <button class="button button--secondary" on:click=move |_| view_mode.set(OrderView::Details)>"Voltar"</button>
        </div>
    }
}
