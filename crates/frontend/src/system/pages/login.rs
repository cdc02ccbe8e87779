use contracts::system::auth::{authenticate, Credentials, Role};
use contracts::system::router::Location;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::toasts::use_toasts;
use crate::routes::navigation::use_router;
use crate::system::auth::context::{sign_in, use_store};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

/// Sign-in screen shared by customers and the store manager.
///
/// Opens on the manager tab when the visitor was bounced from `#admin`.
#[component]
pub fn AuthPage() -> impl IntoView {
    let store = use_store();
    let router = use_router();
    let toasts = use_toasts();

    let initial_role = if router.outcome.with_untracked(|o| o.requested == Location::AdminRequest) {
        Role::Admin
    } else {
        Role::Customer
    };
    let role = RwSignal::new(initial_role);
    let mode = RwSignal::new(AuthMode::SignIn);
    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let from_checkout = move || {
        role.get() == Role::Customer
            && (router.requested() == Location::CheckoutRequest || !store.cart_is_empty())
    };
    let is_admin_tab = move || role.get() == Role::Admin;

    let select_role = move |next: Role| {
        role.set(next);
        error_message.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let credentials = match role.get_untracked() {
            Role::Admin => Credentials::Admin {
                username: identifier.get_untracked(),
                password: password.get_untracked(),
            },
            Role::Customer => Credentials::Customer {
                email: identifier.get_untracked(),
                password: password.get_untracked(),
            },
        };
        let auth_config = store.config().auth;

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            TimeoutFuture::new(auth_config.login_delay_ms).await;
            match authenticate(&credentials, &auth_config) {
                Ok(user) => {
                    log::info!("signed in as {} ({})", user.email, user.role.as_str());
                    is_loading.set(false);
                    sign_in(store, router, toasts, user);
                }
                Err(e) => {
                    log::warn!("sign-in rejected ({}): {}", credentials.role().as_str(), e);
                    error_message.set(Some(e.to_string()));
                    is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-box">
                <Show when=from_checkout>
                    <div class="notice">
                        <h4>"Identificação Necessária"</h4>
                        <p>"Por favor, acesse sua conta para finalizar o pedido com segurança."</p>
                    </div>
                </Show>

                <div class="segmented">
                    {[Role::Customer, Role::Admin]
                        .into_iter()
                        .map(|r| view! {
                            <button
                                class=move || if role.get() == r { "segmented__item segmented__item--active" } else { "segmented__item" }
                                on:click=move |_| select_role(r)
                            >
                                {r.display_name()}
                            </button>
                        })
                        .collect_view()}
                </div>

                <div class="auth-box__title">
                    <h2>
                        {move || match (role.get(), mode.get()) {
                            (Role::Admin, _) => "Acesso Gestor",
                            (Role::Customer, AuthMode::SignIn) => "Bem-vindo de volta",
                            (Role::Customer, AuthMode::SignUp) => "Criar conta",
                        }}
                    </h2>
                    <p class="muted">
                        {move || if is_admin_tab() {
                            "Área restrita para administração da loja."
                        } else {
                            "Entre com seus dados para continuar suas compras."
                        }}
                    </p>
                </div>

                <form class="card" on:submit=on_submit>
                    <Show when=move || !is_admin_tab() && mode.get() == AuthMode::SignUp>
                        <div class="form-group">
                            <label for="full-name">"Nome Completo"</label>
                            <input type="text" id="full-name" placeholder="Seu nome" />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="identifier">{move || if is_admin_tab() { "Usuário" } else { "E-mail" }}</label>
                        <input
                            type=move || if is_admin_tab() { "text" } else { "email" }
                            id="identifier"
                            placeholder=move || if is_admin_tab() { "admin" } else { "voce@exemplo.com" }
                            prop:value=move || identifier.get()
                            on:input=move |ev| identifier.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Senha"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || is_loading.get()
                    >
                        {move || match (is_loading.get(), is_admin_tab(), mode.get()) {
                            (true, _, _) => "Entrando...",
                            (false, true, _) => "Acessar Painel",
                            (false, false, AuthMode::SignIn) => "Entrar",
                            (false, false, AuthMode::SignUp) => "Criar Conta",
                        }}
                    </button>
                </form>

                <Show when=move || !is_admin_tab()>
                    <p class="auth-box__switch">
                        {move || if mode.get() == AuthMode::SignIn { "Não tem uma conta? " } else { "Já tem uma conta? " }}
                        <button
                            class="link"
                            on:click=move |_| mode.update(|m| {
                                *m = match m {
                                    AuthMode::SignIn => AuthMode::SignUp,
                                    AuthMode::SignUp => AuthMode::SignIn,
                                }
                            })
                        >
                            {move || if mode.get() == AuthMode::SignIn { "Cadastre-se" } else { "Entrar" }}
                        </button>
                    </p>
                </Show>

                <Show when=is_admin_tab>
                    <div class="login-info">
                        <p>"Acesso de demonstração:"</p>
                        <p>"Usuário: " <strong>"admin"</strong> " · Senha: " <strong>"admin"</strong></p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
