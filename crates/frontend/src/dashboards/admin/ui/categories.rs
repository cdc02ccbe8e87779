use contracts::domain::catalog::seed::ALL_CATEGORIES;
use contracts::state::Action;
use leptos::prelude::*;

use crate::layout::toasts::use_toasts;
use crate::system::auth::context::use_store;

#[derive(Clone, Debug, PartialEq)]
enum CategoryEditor {
    Closed,
    New,
    Renaming(String),
}

#[component]
pub fn CategoriesTab() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();
    let editor = RwSignal::new(CategoryEditor::Closed);
    let input = RwSignal::new(String::new());

    let close = move || {
        input.set(String::new());
        editor.set(CategoryEditor::Closed);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = input.get_untracked();
        let action = match editor.get_untracked() {
            CategoryEditor::Renaming(from) => Action::RenameCategory {
                from,
                to: name.clone(),
            },
            _ => Action::AddCategory(name.clone()),
        };
        match store.dispatch(action) {
            Ok(()) => {
                toasts.success(format!("Categoria \"{}\" salva", name.trim()));
                close();
            }
            Err(e) => toasts.error(e.to_string()),
        }
    };

    let delete = move |name: String| match store.dispatch(Action::DeleteCategory(name.clone())) {
        Ok(()) => toasts.success(format!("Categoria \"{}\" removida", name)),
        Err(e) => toasts.error(e.to_string()),
    };

    let rows = move || {
        store.state.with(|s| {
            s.catalog
                .categories
                .iter()
                .map(|c| {
                    let count = s
                        .catalog
                        .products
                        .iter()
                        .filter(|p| c == ALL_CATEGORIES || &p.category == c)
                        .count();
                    (c.clone(), count)
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show
            when=move || editor.with(|e| *e == CategoryEditor::Closed)
            fallback=move || view! {
                <div class="card editor">
                    <button class="link" on:click=move |_| close()>"← Voltar para a Lista"</button>
                    <form class="editor__form" on:submit=on_save>
                        <div class="form-group">
                            <label>"Nome da Categoria"</label>
                            <input
                                type="text"
                                required
                                autofocus
                                placeholder="Ex: Coleção de Inverno..."
                                prop:value=move || input.get()
                                on:input=move |ev| input.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="editor__actions">
                            <button type="submit" class="button button--primary">"Salvar"</button>
                            <button type="button" class="button button--ghost" on:click=move |_| close()>"Cancelar"</button>
                        </div>
                    </form>
                </div>
            }
        >
            <div class="toolbar">
                <span></span>
                <button class="button button--primary" on:click=move |_| editor.set(CategoryEditor::New)>
                    "+ Criar Categoria"
                </button>
            </div>
            <div class="category-grid">
                <For
                    each=rows
                    key=|row| row.clone()
                    children=move |(category, count)| {
                        let protected = category == ALL_CATEGORIES;
                        let to_rename = category.clone();
                        let to_delete = category.clone();
                        view! {
                            <div class="card category-card">
                                <div>
                                    <h3>{category.clone()}</h3>
                                    <p class="muted">{format!("{} Itens", count)}</p>
                                </div>
                                {(!protected).then(|| view! {
                                    <div class="category-card__actions">
                                        <button class="link" on:click=move |_| {
                                            input.set(to_rename.clone());
                                            editor.set(CategoryEditor::Renaming(to_rename.clone()));
                                        }>"Editar"</button>
                                        <button class="link-danger" on:click=move |_| delete(to_delete.clone())>
                                            "Excluir"
                                        </button>
                                    </div>
                                })}
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
