use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard stat tile: label, icon, a derived value and an optional
/// hint line under it.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary value, already formatted
    #[prop(into)]
    value: Signal<String>,
    /// Optional hint below the value
    #[prop(into, optional)]
    hint: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__icon">{icon(&icon_name)}</span>
            </div>
            <div class="stat-card__value">{move || value.get()}</div>
            {move || hint.get().map(|h| view! {
                <div class="stat-card__hint">{h}</div>
            })}
        </div>
    }
}
