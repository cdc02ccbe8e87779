use contracts::domain::catalog::form::ProductForm;
use contracts::domain::catalog::seed::ALL_CATEGORIES;
use contracts::domain::catalog::Product;
use contracts::state::Action;
use leptos::prelude::*;

use crate::layout::toasts::use_toasts;
use crate::shared::format::format_brl;
use crate::system::auth::context::use_store;

/// Editor state: closed, creating, or editing an existing product.
#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    New,
    Editing(Product),
}

#[component]
pub fn ProductsTab(category_filter: RwSignal<String>) -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();
    let editor = RwSignal::new(Editor::Closed);
    let threshold = store.config().ui.low_stock_threshold;

    let products = move || {
        let category = category_filter.get();
        store.state.with(|s| {
            s.catalog
                .products
                .iter()
                .filter(|p| category == ALL_CATEGORIES || p.category == category)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let delete = move |id: String| {
        if let Err(e) = store.dispatch(Action::DeleteProduct(id)) {
            toasts.error(e.to_string());
        }
    };

    view! {
        <Show
            when=move || editor.with(|e| *e == Editor::Closed)
            fallback=move || view! { <ProductEditor editor=editor /> }
        >
            <div class="toolbar">
                <span class="muted">
                    {move || {
                        let category = category_filter.get();
                        if category == ALL_CATEGORIES { "Todos os produtos".to_string() } else { category }
                    }}
                </span>
                <button class="button button--primary" on:click=move |_| editor.set(Editor::New)>
                    "+ Novo Produto"
                </button>
            </div>

            <div class="card card--flush">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Produto"</th>
                            <th>"Categoria"</th>
                            <th class="num">"Preço"</th>
                            <th class="num">"Estoque"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=products
                            key=|p| (p.id.clone(), p.name.clone(), p.category.clone(), p.price.to_bits(), p.stock)
                            children=move |product| {
                                let id = product.id.clone();
                                let to_edit = product.clone();
                                let low = product.is_low_stock(threshold);
                                view! {
                                    <tr>
                                        <td class="table__product">
                                            <img src=product.image.clone() alt=product.name.clone() />
                                            <span>{product.name.clone()}</span>
                                        </td>
                                        <td>{product.category.clone()}</td>
                                        <td class="num">{format_brl(product.price)}</td>
                                        <td class=if low { "num warning" } else { "num" }>{product.stock}</td>
                                        <td class="table__actions">
                                            <button class="link" on:click=move |_| editor.set(Editor::Editing(to_edit.clone()))>
                                                "Editar"
                                            </button>
                                            <button class="link-danger" on:click=move |_| delete(id.clone())>
                                                "Excluir"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[component]
fn ProductEditor(editor: RwSignal<Editor>) -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();

    let existing = editor.with_untracked(|e| match e {
        Editor::Editing(p) => Some(p.clone()),
        _ => None,
    });
    let default_category = store.state.with_untracked(|s| {
        s.catalog
            .categories
            .iter()
            .find(|c| c.as_str() != ALL_CATEGORIES)
            .or_else(|| s.catalog.categories.first())
            .cloned()
            .unwrap_or_default()
    });
    let form = RwSignal::new(match &existing {
        Some(p) => ProductForm::from_product(p),
        None => ProductForm::blank(&default_category),
    });
    let is_new = existing.is_none();
    let existing = StoredValue::new(existing);
    let new_size = RwSignal::new(String::new());
    let new_image = RwSignal::new(String::new());

    let close = move || editor.set(Editor::Closed);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let built = existing.with_value(|existing| form.with_untracked(|f| f.build(existing.as_ref())));
        match built {
            Ok(product) => {
                let name = product.name.clone();
                let result = if is_new {
                    store.dispatch(Action::AddProduct(product))
                } else {
                    store.dispatch(Action::UpdateProduct(product))
                };
                match result {
                    Ok(()) => {
                        toasts.success(format!("Produto \"{}\" salvo", name));
                        close();
                    }
                    Err(e) => toasts.error(e.to_string()),
                }
            }
            Err(e) => toasts.error(e.to_string()),
        }
    };

    let add_size = move || {
        form.update(|f| f.add_size(&new_size.get_untracked()));
        new_size.set(String::new());
    };
    let add_image = move || {
        form.update(|f| f.add_image(&new_image.get_untracked()));
        new_image.set(String::new());
    };

    let categories = move || {
        store.state.with(|s| {
            s.catalog
                .categories
                .iter()
                .filter(|c| c.as_str() != ALL_CATEGORIES)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="card editor">
            <button class="link" on:click=move |_| close()>"← Voltar para a Lista"</button>
            <h3>{if is_new { "Novo Produto" } else { "Editar Produto" }}</h3>

            <form class="editor__form" on:submit=on_save>
                <div class="form-group">
                    <label>"Nome"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Descrição"</label>
                    <textarea
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label>"Preço (R$)"</label>
                        <input
                            type="text"
                            inputmode="decimal"
                            required
                            prop:value=move || form.with(|f| f.price.clone())
                            on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Estoque"</label>
                        <input
                            type="number"
                            min="0"
                            required
                            prop:value=move || form.with(|f| f.stock.clone())
                            on:input=move |ev| form.update(|f| f.stock = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Categoria"</label>
                        <select
                            prop:value=move || form.with(|f| f.category.clone())
                            on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                        >
                            <For
                                each=categories
                                key=|c| c.clone()
                                children=move |category| {
                                    let value = category.clone();
                                    view! { <option value=value>{category}</option> }
                                }
                            />
                        </select>
                    </div>
                </div>

                <div class="form-group">
                    <label>"Imagens (URL)"</label>
                    <div class="chips">
                        {move || form.with(|f| f.images.clone()).into_iter().enumerate().map(|(idx, url)| {
                            view! {
                                <span class="chip">
                                    <img src=url.clone() alt="" />
                                    <button type="button" on:click=move |_| form.update(|f| {
                                        if idx < f.images.len() {
                                            f.images.remove(idx);
                                        }
                                    })>"×"</button>
                                </span>
                            }
                        }).collect_view()}
                    </div>
                    <div class="inline-input">
                        <input
                            type="url"
                            placeholder="https://..."
                            prop:value=move || new_image.get()
                            on:input=move |ev| new_image.set(event_target_value(&ev))
                        />
                        <button type="button" class="button button--secondary" on:click=move |_| add_image()>
                            "Adicionar"
                        </button>
                    </div>
                </div>

                <div class="form-group">
                    <label>"Tamanhos"</label>
                    <div class="chips">
                        {move || form.with(|f| f.sizes.clone()).into_iter().map(|size| {
                            let label = size.clone();
                            view! {
                                <span class="chip">
                                    {label}
                                    <button type="button" on:click=move |_| form.update(|f| f.remove_size(&size))>"×"</button>
                                </span>
                            }
                        }).collect_view()}
                    </div>
                    <div class="inline-input">
                        <input
                            type="text"
                            placeholder="Ex: M"
                            prop:value=move || new_size.get()
                            on:input=move |ev| new_size.set(event_target_value(&ev))
                        />
                        <button type="button" class="button button--secondary" on:click=move |_| add_size()>
                            "Adicionar"
                        </button>
                    </div>
                </div>

                <div class="editor__actions">
                    <button type="submit" class="button button--primary">"Salvar"</button>
                    <button type="button" class="button button--ghost" on:click=move |_| close()>"Cancelar"</button>
                </div>
            </form>
        </div>
    }
}
