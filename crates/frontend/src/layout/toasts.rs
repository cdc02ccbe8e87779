use contracts::shared::notification::{NotificationKind, Notifications};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Service for transient toast messages.
#[derive(Clone, Copy)]
pub struct ToastService {
    items: RwSignal<Notifications>,
    lifetime_ms: u32,
}

impl ToastService {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Notifications::default()),
            lifetime_ms,
        }
    }

    /// Show a toast; it dismisses itself after the configured lifetime.
    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) {
        let Some(id) = self.items.try_update(|queue| queue.push(kind, message)) else {
            return;
        };
        let items = self.items;
        Timeout::new(self.lifetime_ms, move || {
            items.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|queue| queue.dismiss(id));
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.items.with(|queue| queue.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast--{}", toast.kind.as_str())>
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| toasts.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
