use leptos::prelude::*;

/// Tone of a stat card's accent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Good,
    Warning,
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    tone: StatTone,
    /// Optional line below the value
    #[prop(into, optional)]
    subtitle: Option<String>,
) -> impl IntoView {
    let class = match tone {
        StatTone::Good => "stat-card stat-card--success",
        StatTone::Warning => "stat-card stat-card--warning",
        StatTone::Neutral => "stat-card",
    };

    view! {
        <div class=class>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{move || value.get()}</div>
            {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
        </div>
    }
}
