use contracts::domain::catalog::seed::ALL_CATEGORIES;
use contracts::domain::order::{DashboardStats, SEED_CUSTOMERS, SEED_ORDERS};
use leptos::prelude::*;

use super::categories::CategoriesTab;
use super::customers::CustomersTab;
use super::orders::{OrdersTab, StatusBadge};
use super::products::ProductsTab;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::format::{format_brl, format_int};
use crate::system::auth::context::use_store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTab {
    Overview,
    Products,
    Categories,
    Orders,
    Customers,
}

impl AdminTab {
    pub fn all() -> [AdminTab; 5] {
        [
            AdminTab::Overview,
            AdminTab::Products,
            AdminTab::Categories,
            AdminTab::Orders,
            AdminTab::Customers,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Visão Geral",
            AdminTab::Products => "Produtos",
            AdminTab::Categories => "Categorias",
            AdminTab::Orders => "Pedidos",
            AdminTab::Customers => "Clientes",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Painel de Desempenho",
            AdminTab::Products => "Gestão de Estoque",
            AdminTab::Categories => "Categorias de Produtos",
            AdminTab::Orders => "Gerenciamento de Pedidos",
            AdminTab::Customers => "Base de Clientes",
        }
    }
}

/// Back office: sidebar with tabs and quick category access, content on the right.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let store = use_store();
    let active_tab = RwSignal::new(AdminTab::Overview);
    // product list filter, independent from the storefront selection
    let category_filter = RwSignal::new(ALL_CATEGORIES.to_string());
    let quick_access_open = RwSignal::new(true);

    let categories = move || store.state.with(|s| s.catalog.categories.clone());

    view! {
        <div class="admin">
            <aside class="admin__sidebar no-print">
                <h3 class="caption">"Painel de Controle"</h3>
                <nav class="admin__nav">
                    {AdminTab::all()
                        .into_iter()
                        .map(|tab| view! {
                            <button
                                class=move || if active_tab.get() == tab { "admin__nav-item admin__nav-item--active" } else { "admin__nav-item" }
                                on:click=move |_| active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        })
                        .collect_view()}
                </nav>

                <button class="admin__section-toggle" on:click=move |_| quick_access_open.update(|v| *v = !*v)>
                    "Acesso Rápido"
                    <span>{move || if quick_access_open.get() { "▴" } else { "▾" }}</span>
                </button>
                <Show when=move || quick_access_open.get()>
                    <nav class="admin__nav admin__nav--compact">
                        <For
                            each=categories
                            key=|category| category.clone()
                            children=move |category| {
                                let active = category.clone();
                                let label = category.clone();
                                view! {
                                    <button
                                        class=move || {
                                            if active_tab.get() == AdminTab::Products && category_filter.get() == active {
                                                "admin__nav-item admin__nav-item--soft"
                                            } else {
                                                "admin__nav-item"
                                            }
                                        }
                                        on:click=move |_| {
                                            active_tab.set(AdminTab::Products);
                                            category_filter.set(category.clone());
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            }
                        />
                    </nav>
                </Show>
            </aside>

            <section class="admin__content">
                <header class="admin__header no-print">
                    <h1>{move || active_tab.get().title()}</h1>
                    <p class="muted">
                        {move || if active_tab.get() == AdminTab::Overview {
                            "Acompanhe as métricas de vendas em tempo real."
                        } else {
                            "Administre os dados operacionais da Lumina."
                        }}
                    </p>
                </header>

                {move || match active_tab.get() {
                    AdminTab::Overview => view! { <Overview /> }.into_any(),
                    AdminTab::Products => view! { <ProductsTab category_filter=category_filter /> }.into_any(),
                    AdminTab::Categories => view! { <CategoriesTab /> }.into_any(),
                    AdminTab::Orders => view! { <OrdersTab /> }.into_any(),
                    AdminTab::Customers => view! { <CustomersTab /> }.into_any(),
                }}
            </section>
        </div>
    }
}

#[component]
fn Overview() -> impl IntoView {
    let store = use_store();
    let threshold = store.config().ui.low_stock_threshold;

    let stats = Memo::new(move |_| {
        store.state.with(|s| {
            DashboardStats::compute(&SEED_ORDERS, &SEED_CUSTOMERS, &s.catalog.products, threshold)
        })
    });
    let product_count = move || store.state.with(|s| s.catalog.products.len());

    view! {
        <div class="stat-grid">
            <StatCard label="Receita Total" tone=StatTone::Good value=Signal::derive(move || format_brl(stats.get().revenue)) />
            <StatCard label="Total de Pedidos" value=Signal::derive(move || format_int(stats.get().order_count as f64)) />
            <StatCard label="Produtos Ativos" value=Signal::derive(move || product_count().to_string()) />
            <StatCard label="Total de Clientes" value=Signal::derive(move || format_int(stats.get().customer_count as f64)) />
            <StatCard
                label="Estoque Baixo"
                tone=StatTone::Warning
                value=Signal::derive(move || stats.get().low_stock_count.to_string())
                subtitle=format!("menos de {} unidades", threshold)
            />
        </div>

        <div class="card">
            <h3>"Vendas Recentes"</h3>
            <div class="recent-orders">
                {SEED_ORDERS
                    .iter()
                    .take(4)
                    .map(|order| view! {
                        <div class="recent-order">
                            <div>
                                <p class="strong">{order.customer_name.clone()}</p>
                                <p class="muted">{order.formatted_date()}</p>
                            </div>
                            <div class="recent-order__right">
                                <p class="strong">{format_brl(order.total)}</p>
                                <StatusBadge status=order.status />
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_have_distinct_titles() {
        let titles: Vec<_> = AdminTab::all().iter().map(AdminTab::title).collect();
        let mut unique = titles.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(titles.len(), unique.len());
        assert_eq!(AdminTab::Overview.label(), "Visão Geral");
    }
}
