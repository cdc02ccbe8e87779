use contracts::domain::order::SEED_CUSTOMERS;
use leptos::prelude::*;

use crate::shared::format::format_brl;

#[component]
pub fn CustomersTab() -> impl IntoView {
    view! {
        <div class="card card--flush">
            <table class="table">
                <thead>
                    <tr>
                        <th>"Cliente"</th>
                        <th>"E-mail"</th>
                        <th class="num">"Pedidos"</th>
                        <th class="num">"Total Gasto"</th>
                    </tr>
                </thead>
                <tbody>
                    {SEED_CUSTOMERS
                        .iter()
                        .map(|customer| view! {
                            <tr>
                                <td class="strong">{customer.name.clone()}</td>
                                <td class="muted">{customer.email.clone()}</td>
                                <td class="num">{customer.orders}</td>
                                <td class="num">{format_brl(customer.total_spent)}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
